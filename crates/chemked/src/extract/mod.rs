//! Extraction rules for each section of a ReSpecTh document.

mod datapoints;
mod experiment;
mod ignition;
mod metadata;
mod properties;

pub use datapoints::datapoints;
pub use experiment::{classify, ExperimentKind};
pub use ignition::ignition_type;
pub use metadata::{file_metadata, FileMetadata};
pub use properties::common_properties;
