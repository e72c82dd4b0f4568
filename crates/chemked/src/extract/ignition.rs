//! The ignition-delay definition: target quantity and detection method.

use roxmltree::Node;

use crate::error::{ChemkedError, Result};
use crate::input;
use crate::record::{DetectionMethod, IgnitionDefinition, IgnitionTarget};

/// Parse and validate the `ignitionType` element.
///
/// Validation order is part of the contract: attribute presence first, then
/// the multi-target rejection, then the target and type vocabularies, and for
/// concentration methods the `amount`/`units` attributes are checked before
/// the method is rejected as unimplemented. That way a file missing an
/// attribute is reported as such rather than as an unsupported method.
pub fn ignition_type(root: Node) -> Result<IgnitionDefinition> {
    let elem = input::find(root, "ignitionType")
        .ok_or_else(|| ChemkedError::missing_element("ignitionType"))?;

    let raw_target = input::attr(elem, "target")
        .ok_or_else(|| ChemkedError::missing_attribute("ignitionType", "target"))?;
    let raw_type = input::attr(elem, "type")
        .ok_or_else(|| ChemkedError::missing_attribute("ignitionType", "type"))?;

    let target_keyword = raw_target.trim_end_matches(';').to_uppercase();

    // ReSpecTh allows multiple targets; the record format does not.
    if target_keyword.split(';').count() > 1 {
        return Err(ChemkedError::NotImplemented(
            "multiple ignition targets".to_string(),
        ));
    }

    let target_keyword = match target_keyword.as_str() {
        "OHEX" => "OH*",
        "CHEX" => "CH*",
        other => other,
    };

    let target = match target_keyword {
        "P" => IgnitionTarget::Pressure,
        "T" => IgnitionTarget::Temperature,
        "OH" => IgnitionTarget::Oh,
        "OH*" => IgnitionTarget::OhExcited,
        "CH" => IgnitionTarget::Ch,
        "CH*" => IgnitionTarget::ChExcited,
        other => return Err(ChemkedError::UndefinedKeyword(other.to_string())),
    };

    let method = DetectionMethod::from_keyword(raw_type)
        .ok_or_else(|| ChemkedError::UndefinedKeyword(raw_type.to_string()))?;

    if matches!(
        method,
        DetectionMethod::BaselineMaxIntercept | DetectionMethod::BaselineMinIntercept
    ) {
        return Err(ChemkedError::NotImplemented(raw_type.to_string()));
    }

    if matches!(
        method,
        DetectionMethod::Concentration | DetectionMethod::RelativeConcentration
    ) {
        input::attr(elem, "amount")
            .ok_or_else(|| ChemkedError::missing_attribute("ignitionType", "amount"))?;
        input::attr(elem, "units")
            .ok_or_else(|| ChemkedError::missing_attribute("ignitionType", "units"))?;
        return Err(ChemkedError::NotImplemented(
            "concentration ignition delay type".to_string(),
        ));
    }

    Ok(IgnitionDefinition { method, target })
}
