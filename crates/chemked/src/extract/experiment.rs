//! Experiment type and apparatus classification.

use roxmltree::Node;

use crate::error::{ChemkedError, Result};
use crate::input;
use crate::record::{Apparatus, ApparatusKind, ExperimentType};

/// The classified experiment type and apparatus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentKind {
    pub experiment_type: ExperimentType,
    pub apparatus: Apparatus,
}

/// Classify the experiment type and apparatus from the document root.
///
/// Only ignition-delay measurements are convertible today; other experiment
/// types are vocabulary errors rather than silently skipped files.
pub fn classify(root: Node) -> Result<ExperimentKind> {
    let type_elem = input::require(root, "experimentType")?;
    let type_text = input::text(type_elem).unwrap_or_default();
    if type_text != "Ignition delay measurement" {
        return Err(ChemkedError::UndefinedKeyword(format!(
            "experimentType '{}'",
            type_text
        )));
    }

    let kind_elem = input::find_path(root, "apparatus/kind")
        .ok_or_else(|| ChemkedError::missing_element("apparatus/kind"))?;
    let kind_text = input::text(kind_elem)
        .ok_or_else(|| ChemkedError::missing_element("apparatus/kind"))?;
    let kind = ApparatusKind::from_keyword(kind_text).ok_or_else(|| {
        ChemkedError::NotImplemented(format!("{} experiment", kind_text))
    })?;

    Ok(ExperimentKind {
        experiment_type: ExperimentType::IgnitionDelay,
        apparatus: Apparatus::new(kind),
    })
}
