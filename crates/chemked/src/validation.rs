//! Rule-based validation of the assembled record.
//!
//! Runs after the common-property broadcast, immediately before the record
//! is serialized. The extractors already reject malformed sections, so the
//! rules here are whole-record invariants: reference shape, datapoint
//! completeness, and apparatus-specific legality of the volume history.

use serde::{Deserialize, Serialize};

use crate::error::{ChemkedError, Result};
use crate::record::{ApparatusKind, ExperimentRecord};

/// A single validation failure, addressed by record path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validates assembled experiment records.
#[derive(Debug, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Check a record against the whole-record rules.
    ///
    /// Returns every violation at once rather than stopping at the first, so
    /// a failing file can be fixed in one pass.
    pub fn validate(&self, record: &ExperimentRecord) -> Result<()> {
        let mut errors = Vec::new();

        self.check_reference(record, &mut errors);
        self.check_datapoints(record, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ChemkedError::Validation(errors))
        }
    }

    fn check_reference(&self, record: &ExperimentRecord, errors: &mut Vec<ValidationError>) {
        let reference = &record.reference;

        if reference.doi.is_none() && reference.citation.is_none() {
            errors.push(ValidationError::new(
                "reference",
                "either a DOI or a citation fallback is required",
            ));
        }
        if reference.citation.is_some() && reference.journal.is_some() {
            errors.push(ValidationError::new(
                "reference",
                "citation fallback and resolved citation fields are mutually exclusive",
            ));
        }
    }

    fn check_datapoints(&self, record: &ExperimentRecord, errors: &mut Vec<ValidationError>) {
        if record.datapoints.is_empty() {
            errors.push(ValidationError::new("datapoints", "at least one datapoint is required"));
            return;
        }

        for (index, datapoint) in record.datapoints.iter().enumerate() {
            for required in ["ignition-delay", "temperature", "pressure"] {
                if !datapoint.has(required) {
                    errors.push(ValidationError::new(
                        format!("datapoints[{}].{}", index, required),
                        "required property is missing",
                    ));
                }
            }
            if datapoint.composition.is_none() {
                errors.push(ValidationError::new(
                    format!("datapoints[{}].composition", index),
                    "required property is missing",
                ));
            }
            if datapoint.ignition_type.is_none() {
                errors.push(ValidationError::new(
                    format!("datapoints[{}].ignition-type", index),
                    "required property is missing",
                ));
            }
            if datapoint.volume_history.is_some()
                && record.apparatus.kind != ApparatusKind::RapidCompressionMachine
            {
                errors.push(ValidationError::new(
                    format!("datapoints[{}].volume-history", index),
                    "volume history is only valid for rapid compression machines",
                ));
            }
        }
    }
}
