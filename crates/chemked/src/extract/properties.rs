//! File-wide common properties, including the initial composition.

use roxmltree::Node;
use tracing::warn;

use crate::error::{ChemkedError, Result};
use crate::input;
use crate::record::{
    ApparatusKind, CommonProperties, Composition, CompositionKind, SpeciesAmount,
};
use crate::units;

/// Extract the properties shared by every datapoint in the file.
///
/// Unrecognized property names are skipped so newer ReSpecTh files with
/// additional properties still convert.
pub fn common_properties(root: Node, apparatus: ApparatusKind) -> Result<CommonProperties> {
    let mut properties = CommonProperties::default();

    let Some(section) = input::find(root, "commonProperties") else {
        return Ok(properties);
    };

    for elem in input::children(section, "property") {
        let name = input::require_attr(elem, "name")?;
        match name {
            "initial composition" => {
                properties.composition = Some(composition(elem)?);
            }
            "temperature" => {
                properties.temperature = Some(vec![quantity(elem)?]);
            }
            "pressure" => {
                properties.pressure = Some(vec![quantity(elem)?]);
            }
            "pressure rise" => {
                // Given in fraction of initial pressure per unit of time.
                if apparatus == ApparatusKind::RapidCompressionMachine {
                    return Err(ChemkedError::Inconsistency(
                        "pressure rise cannot be defined for RCM".to_string(),
                    ));
                }
                properties.pressure_rise = Some(vec![quantity(elem)?]);
            }
            "compression time" => {
                if apparatus == ApparatusKind::ShockTube {
                    return Err(ChemkedError::Inconsistency(
                        "compression time cannot be defined for shock tube".to_string(),
                    ));
                }
                properties.compression_time = Some(vec![quantity(elem)?]);
            }
            _ => {}
        }
    }

    Ok(properties)
}

/// Read a property's `value` child and `units` attribute as one quantity.
fn quantity(elem: Node) -> Result<String> {
    let value_elem = input::find(elem, "value")
        .ok_or_else(|| ChemkedError::missing_element("property/value"))?;
    let value = input::require_text(value_elem)?;
    let units = input::require_attr(elem, "units")?;
    Ok(units::format_quantity(value, units))
}

/// Build the initial composition, enforcing one amount unit across the block.
fn composition(elem: Node) -> Result<Composition> {
    let mut species = Vec::new();
    let mut expected_units: Option<String> = None;

    for component in elem
        .descendants()
        .filter(|node| node.is_element() && node.has_tag_name("component"))
    {
        let link = input::require(component, "speciesLink")?;
        let species_name = input::require_attr(link, "preferredKey")?.to_string();

        let inchi = input::attr(link, "InChI").map(str::to_string);
        if inchi.is_none() {
            warn!(species = %species_name, "missing InChI for species");
        }

        let amount_elem = input::require(component, "amount")?;
        let amount_text = input::require_text(amount_elem)?;
        let amount: f64 = amount_text.parse().map_err(|_| {
            ChemkedError::Inconsistency(format!(
                "amount '{}' for species '{}' is not numeric",
                amount_text, species_name
            ))
        })?;

        // The first species establishes the expected unit for the block.
        let amount_units = input::require_attr(amount_elem, "units")?;
        match &expected_units {
            None => expected_units = Some(amount_units.to_string()),
            Some(expected) if expected != amount_units => {
                return Err(ChemkedError::Inconsistency(
                    "inconsistent initial composition units".to_string(),
                ));
            }
            Some(_) => {}
        }

        species.push(SpeciesAmount {
            species_name,
            inchi,
            amount: vec![amount],
        });
    }

    let units = expected_units
        .ok_or_else(|| ChemkedError::missing_element("commonProperties/property/component"))?;
    let kind = CompositionKind::from_units(&units).ok_or_else(|| {
        ChemkedError::UndefinedKeyword(format!("composition units '{}'", units))
    })?;

    Ok(Composition { kind, species })
}
