//! The normalized ChemKED record model.
//!
//! Every type here is constructed once per conversion run and never mutated
//! after the final consistency checks. Serialization order of the struct
//! fields is the order the keys appear in the emitted YAML.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered sequence of `"<value> <unit>"` quantity strings.
///
/// Most properties hold exactly one quantity today; the sequence shape leaves
/// room for multi-valued properties without a schema change.
pub type QuantityList = Vec<String>;

/// Author of the converted file (not of the underlying publication).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAuthor {
    pub name: String,
    #[serde(rename = "ORCID", skip_serializing_if = "Option::is_none", default)]
    pub orcid: Option<String>,
}

/// A publication author resolved from the DOI registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(rename = "ORCID", skip_serializing_if = "Option::is_none", default)]
    pub orcid: Option<String>,
}

/// Bibliographic reference for the experiment.
///
/// Either the DOI-based fields or the `citation` fallback are populated,
/// never both. A connectivity failure during lookup leaves only `doi` set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub journal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub volume: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub authors: Option<Vec<Author>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub citation: Option<String>,
    /// Provenance note naming the source file.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub detail: Option<String>,
}

/// The supported experiment kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperimentType {
    #[serde(rename = "ignition delay")]
    IgnitionDelay,
}

/// The supported experimental apparatus kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApparatusKind {
    #[serde(rename = "shock tube")]
    ShockTube,
    #[serde(rename = "rapid compression machine")]
    RapidCompressionMachine,
}

impl ApparatusKind {
    /// Parse the apparatus kind from its ReSpecTh spelling.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "shock tube" => Some(ApparatusKind::ShockTube),
            "rapid compression machine" => Some(ApparatusKind::RapidCompressionMachine),
            _ => None,
        }
    }
}

/// The experimental apparatus. The kind constrains which common properties
/// are legal (pressure rise for shock tubes, compression time for RCMs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apparatus {
    pub kind: ApparatusKind,
    pub institution: String,
    pub facility: String,
}

impl Apparatus {
    pub fn new(kind: ApparatusKind) -> Self {
        Self {
            kind,
            institution: String::new(),
            facility: String::new(),
        }
    }
}

/// How species amounts in a composition are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompositionKind {
    #[serde(rename = "mole fraction")]
    MoleFraction,
    #[serde(rename = "mass fraction")]
    MassFraction,
}

impl CompositionKind {
    /// Parse the composition kind from an amount's unit token.
    pub fn from_units(units: &str) -> Option<Self> {
        match units {
            "mole fraction" => Some(CompositionKind::MoleFraction),
            "mass fraction" => Some(CompositionKind::MassFraction),
            _ => None,
        }
    }
}

/// One species entry of an initial composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesAmount {
    #[serde(rename = "species-name")]
    pub species_name: String,
    #[serde(rename = "InChI", skip_serializing_if = "Option::is_none", default)]
    pub inchi: Option<String>,
    pub amount: Vec<f64>,
}

/// Initial mixture composition. All species amounts share one unit kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub kind: CompositionKind,
    pub species: Vec<SpeciesAmount>,
}

/// The quantity watched for the ignition event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnitionTarget {
    #[serde(rename = "pressure")]
    Pressure,
    #[serde(rename = "temperature")]
    Temperature,
    #[serde(rename = "OH")]
    Oh,
    #[serde(rename = "OH*")]
    OhExcited,
    #[serde(rename = "CH")]
    Ch,
    #[serde(rename = "CH*")]
    ChExcited,
}

/// The detection method vocabulary for ignition delay.
///
/// The baseline-intercept and concentration methods are part of the
/// vocabulary but rejected as unimplemented during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionMethod {
    #[serde(rename = "max")]
    Max,
    #[serde(rename = "d/dt max")]
    DerivativeMax,
    #[serde(rename = "baseline max intercept from d/dt")]
    BaselineMaxIntercept,
    #[serde(rename = "baseline min intercept from d/dt")]
    BaselineMinIntercept,
    #[serde(rename = "concentration")]
    Concentration,
    #[serde(rename = "relative concentration")]
    RelativeConcentration,
}

impl DetectionMethod {
    /// Parse a detection method from its ReSpecTh spelling.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "max" => Some(DetectionMethod::Max),
            "d/dt max" => Some(DetectionMethod::DerivativeMax),
            "baseline max intercept from d/dt" => Some(DetectionMethod::BaselineMaxIntercept),
            "baseline min intercept from d/dt" => Some(DetectionMethod::BaselineMinIntercept),
            "concentration" => Some(DetectionMethod::Concentration),
            "relative concentration" => Some(DetectionMethod::RelativeConcentration),
            _ => None,
        }
    }
}

/// The ignition-delay definition: what is watched, and how the event is
/// detected. The target is always a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgnitionDefinition {
    #[serde(rename = "type")]
    pub method: DetectionMethod,
    pub target: IgnitionTarget,
}

/// One column of a volume-history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryColumn {
    pub units: String,
    pub column: usize,
}

/// Piston-driven volume trace attached to an RCM datapoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeHistory {
    pub time: HistoryColumn,
    pub volume: HistoryColumn,
    /// Ordered `(time, volume)` pairs.
    pub values: Vec<[f64; 2]>,
}

/// One experimental datapoint.
///
/// Measured table columns live in `values` keyed by property name; the
/// common-property broadcast copies shared quantities into the same map so a
/// serialized datapoint is one flat mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(flatten)]
    pub values: IndexMap<String, QuantityList>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub composition: Option<Composition>,
    #[serde(
        rename = "ignition-type",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub ignition_type: Option<IgnitionDefinition>,
    #[serde(
        rename = "volume-history",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub volume_history: Option<VolumeHistory>,
}

impl DataPoint {
    /// Whether the datapoint carries the named quantity property.
    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

/// Properties shared by every datapoint in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonProperties {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub composition: Option<Composition>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub temperature: Option<QuantityList>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pressure: Option<QuantityList>,
    #[serde(
        rename = "pressure-rise",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub pressure_rise: Option<QuantityList>,
    #[serde(
        rename = "compression-time",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub compression_time: Option<QuantityList>,
    #[serde(
        rename = "ignition-type",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub ignition_type: Option<IgnitionDefinition>,
}

/// The complete normalized experiment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    #[serde(rename = "file-author")]
    pub file_author: FileAuthor,
    #[serde(rename = "file-version")]
    pub file_version: i64,
    #[serde(rename = "chemked-version")]
    pub chemked_version: String,
    pub reference: Reference,
    #[serde(rename = "experiment-type")]
    pub experiment_type: ExperimentType,
    pub apparatus: Apparatus,
    #[serde(rename = "common-properties")]
    pub common_properties: CommonProperties,
    pub datapoints: Vec<DataPoint>,
}

impl ExperimentRecord {
    /// Copy every common property into every datapoint.
    ///
    /// Each datapoint receives its own clone; later per-datapoint edits must
    /// not affect siblings. A shared property overwrites a same-named table
    /// column, matching the source-of-truth rule for file-wide values.
    pub fn broadcast_common_properties(&mut self) {
        let common = self.common_properties.clone();
        for datapoint in &mut self.datapoints {
            if let Some(composition) = &common.composition {
                datapoint.composition = Some(composition.clone());
            }
            if let Some(temperature) = &common.temperature {
                datapoint
                    .values
                    .insert("temperature".to_string(), temperature.clone());
            }
            if let Some(pressure) = &common.pressure {
                datapoint
                    .values
                    .insert("pressure".to_string(), pressure.clone());
            }
            if let Some(pressure_rise) = &common.pressure_rise {
                datapoint
                    .values
                    .insert("pressure-rise".to_string(), pressure_rise.clone());
            }
            if let Some(compression_time) = &common.compression_time {
                datapoint
                    .values
                    .insert("compression-time".to_string(), compression_time.clone());
            }
            if let Some(ignition_type) = &common.ignition_type {
                datapoint.ignition_type = Some(ignition_type.clone());
            }
        }
    }
}
