//! The conversion orchestrator.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ChemkedError, Result};
use crate::extract;
use crate::record::ExperimentRecord;
use crate::reference::{self, DoiLookup};
use crate::validation::Validator;

/// Configuration for a converter.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Schema version stamped into every converted record.
    pub chemked_version: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            chemked_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Converts ReSpecTh XML documents into validated ChemKED records.
///
/// One converter can be reused across files; it holds no per-conversion
/// state, so batch callers may share it freely across threads.
pub struct Converter {
    config: ConverterConfig,
    lookup: Option<Arc<dyn DoiLookup>>,
    validator: Validator,
}

impl Converter {
    /// Create a converter with default configuration and no lookup service.
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    /// Create a converter with custom configuration.
    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            config,
            lookup: None,
            validator: Validator::new(),
        }
    }

    /// Add a DOI lookup service for resolving bibliographic references.
    ///
    /// Without one, references keep their bare DOI (or citation fallback).
    pub fn with_lookup(mut self, lookup: impl DoiLookup + 'static) -> Self {
        self.lookup = Some(Arc::new(lookup));
        self
    }

    /// Read one experiment from a ReSpecTh XML document.
    ///
    /// Runs the full extraction sequence and the cross-field consistency
    /// checks. Common properties are left un-broadcast; the serialization
    /// entry points apply the broadcast after any author overrides.
    pub fn read_experiment(&self, xml: &str, source_name: &str) -> Result<ExperimentRecord> {
        let doc = roxmltree::Document::parse(xml)?;
        let root = doc.root_element();

        let metadata = extract::file_metadata(root);

        let mut reference = reference::resolve(root, self.lookup.as_deref())?;
        reference.detail = Some(format!("Converted from {}", source_name));

        let kind = extract::classify(root)?;
        let apparatus_kind = kind.apparatus.kind;

        let mut common_properties = extract::common_properties(root, apparatus_kind)?;
        common_properties.ignition_type = Some(extract::ignition_type(root)?);

        let datapoints = extract::datapoints(root, apparatus_kind)?;

        let record = ExperimentRecord {
            file_author: metadata.file_author,
            file_version: metadata.file_version,
            chemked_version: self.config.chemked_version.clone(),
            reference,
            experiment_type: kind.experiment_type,
            apparatus: kind.apparatus,
            common_properties,
            datapoints,
        };

        check_consistency(&record)?;

        Ok(record)
    }

    /// Convert an XML document string to its ChemKED YAML serialization.
    pub fn convert_to_yaml(
        &self,
        xml: &str,
        source_name: &str,
        file_author: Option<&str>,
        file_author_orcid: Option<&str>,
    ) -> Result<String> {
        let mut record = self.read_experiment(xml, source_name)?;

        if let Some(name) = file_author {
            record.file_author.name = name.to_string();
        }
        if let Some(orcid) = file_author_orcid {
            record.file_author.orcid = Some(orcid.to_string());
        }

        record.broadcast_common_properties();
        self.validator.validate(&record)?;

        Ok(serde_yaml::to_string(&record)?)
    }

    /// Convert a ReSpecTh XML file to a ChemKED YAML file.
    ///
    /// The output lands in `output_dir` (default: alongside the input) under
    /// the input's file stem with a `.yaml` extension. Returns the path of
    /// the written file.
    pub fn convert_file(
        &self,
        input: &Path,
        output_dir: Option<&Path>,
        file_author: Option<&str>,
        file_author_orcid: Option<&str>,
    ) -> Result<PathBuf> {
        let xml = fs::read_to_string(input).map_err(|source| ChemkedError::Io {
            path: input.to_path_buf(),
            source,
        })?;

        let source_name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let yaml = self.convert_to_yaml(&xml, &source_name, file_author, file_author_orcid)?;

        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let directory = match output_dir {
            Some(directory) => directory.to_path_buf(),
            None => input.parent().unwrap_or_else(|| Path::new(".")).to_path_buf(),
        };
        let destination = directory.join(format!("{}.yaml", stem));

        fs::write(&destination, yaml).map_err(|source| ChemkedError::Io {
            path: destination.clone(),
            source,
        })?;

        Ok(destination)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Enforce the cross-field rules that no single extractor can see.
///
/// The common-properties extractor recognizes a closed name set that cannot
/// produce `volume` or `time`, so these combinations only arise through the
/// per-datapoint table columns.
fn check_consistency(record: &ExperimentRecord) -> Result<()> {
    let datapoints = &record.datapoints;

    let any_volume = datapoints.iter().any(|dp| dp.has("volume"));
    let any_time = datapoints.iter().any(|dp| dp.has("time"));
    if any_volume && !any_time {
        return Err(ChemkedError::Inconsistency(
            "time values needed for volume history".to_string(),
        ));
    }

    let any_pressure_rise = record.common_properties.pressure_rise.is_some()
        || datapoints.iter().any(|dp| dp.has("pressure-rise"));
    if any_volume && any_pressure_rise {
        return Err(ChemkedError::Inconsistency(
            "both volume history and pressure rise cannot be specified".to_string(),
        ));
    }

    Ok(())
}
