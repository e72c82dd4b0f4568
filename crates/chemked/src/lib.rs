//! ChemKED: converter from ReSpecTh kinetics XML to validated ChemKED records.
//!
//! The converter walks one ReSpecTh ignition-delay experiment document,
//! resolves units and bibliographic references, reconciles per-experiment
//! and per-datapoint properties, and emits a single normalized record ready
//! for YAML serialization.
//!
//! # Core Principles
//!
//! - **Fail fast**: structural and vocabulary errors abort the conversion;
//!   no partial record is ever written.
//! - **Degrade only on connectivity**: an unreachable DOI registry leaves a
//!   bare DOI with a warning instead of failing the file.
//! - **Deterministic output**: the same document and lookup responses yield
//!   a byte-identical record.
//!
//! # Example
//!
//! ```no_run
//! use chemked::Converter;
//!
//! let converter = Converter::new();
//! let destination = converter
//!     .convert_file("experiment.xml".as_ref(), None, None, None)
//!     .unwrap();
//!
//! println!("Converted to {}", destination.display());
//! ```

pub mod converter;
pub mod error;
pub mod extract;
pub mod input;
pub mod record;
pub mod reference;
pub mod units;
pub mod validation;

pub use converter::{Converter, ConverterConfig};
pub use error::{ChemkedError, Result};
pub use record::{
    Apparatus, ApparatusKind, Author, CommonProperties, Composition, CompositionKind, DataPoint,
    DetectionMethod, ExperimentRecord, ExperimentType, FileAuthor, IgnitionDefinition,
    IgnitionTarget, QuantityList, Reference, SpeciesAmount, VolumeHistory,
};
pub use reference::{CrossrefClient, DoiLookup, LookupError, MockLookup, ReferenceData};
pub use validation::{ValidationError, Validator};
