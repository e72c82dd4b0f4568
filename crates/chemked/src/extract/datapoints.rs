//! Datapoint table reconstruction, including RCM volume histories.

use std::collections::HashMap;

use roxmltree::Node;

use crate::error::{ChemkedError, Result};
use crate::input;
use crate::record::{ApparatusKind, DataPoint, HistoryColumn, VolumeHistory};
use crate::units;

/// Reconstruct the per-datapoint table(s) from the document's data groups.
///
/// The first group is always the primary ignition-delay table. A second
/// group is a time/volume history and is merged into the sole primary
/// datapoint; it only makes sense for RCM experiments, where one file
/// describes one compression event.
pub fn datapoints(root: Node, apparatus: ApparatusKind) -> Result<Vec<DataPoint>> {
    let groups: Vec<Node> = input::children(root, "dataGroup").collect();
    let primary = *groups
        .first()
        .ok_or_else(|| ChemkedError::missing_element("dataGroup"))?;

    let columns = column_table(primary)?;

    let mut points = Vec::new();
    for row in input::children(primary, "dataPoint") {
        let mut point = DataPoint::default();
        for cell in row.children().filter(|node| node.is_element()) {
            let id = cell.tag_name().name();
            let column = columns.get(id).ok_or_else(|| {
                ChemkedError::UndefinedKeyword(format!("dataPoint column '{}'", id))
            })?;
            let value = input::require_text(cell)?;
            point.values.insert(
                column.name.clone(),
                vec![units::format_quantity(value, &column.units)],
            );
        }
        points.push(point);
    }

    match groups.len() {
        0 | 1 => {}
        2 => attach_volume_history(groups[1], apparatus, &mut points)?,
        _ => {
            return Err(ChemkedError::NotImplemented(
                "more than two dataGroups".to_string(),
            ));
        }
    }

    Ok(points)
}

struct Column {
    name: String,
    units: String,
}

/// Map column ids to their semantic name and unit.
fn column_table(group: Node) -> Result<HashMap<String, Column>> {
    let mut columns = HashMap::new();
    for prop in input::children(group, "property") {
        let id = input::require_attr(prop, "id")?.to_string();
        let mut name = input::require_attr(prop, "name")?.to_string();
        if name == "ignition delay" {
            name = "ignition-delay".to_string();
        }
        let units = input::require_attr(prop, "units")?.to_string();
        columns.insert(id, Column { name, units });
    }
    Ok(columns)
}

/// Parse the second data group as a time/volume history and attach it to the
/// single primary datapoint.
fn attach_volume_history(
    group: Node,
    apparatus: ApparatusKind,
    points: &mut [DataPoint],
) -> Result<()> {
    if apparatus != ApparatusKind::RapidCompressionMachine {
        return Err(ChemkedError::Inconsistency(
            "volume history is only valid for rapid compression machines".to_string(),
        ));
    }
    if points.len() != 1 {
        return Err(ChemkedError::Inconsistency(format!(
            "volume history requires exactly one ignition datapoint, found {}",
            points.len()
        )));
    }

    let mut time: Option<(String, String)> = None;
    let mut volume: Option<(String, String)> = None;
    for prop in input::children(group, "property") {
        let id = input::require_attr(prop, "id")?.to_string();
        let units = input::require_attr(prop, "units")?.to_string();
        match input::require_attr(prop, "name")? {
            "time" => time = Some((id, units)),
            "volume" => volume = Some((id, units)),
            _ => {}
        }
    }
    let (time_tag, time_units) = time
        .ok_or_else(|| ChemkedError::missing_element("dataGroup/property[@name='time']"))?;
    let (volume_tag, volume_units) = volume
        .ok_or_else(|| ChemkedError::missing_element("dataGroup/property[@name='volume']"))?;

    let mut values = Vec::new();
    for row in input::children(group, "dataPoint") {
        let mut time_value: Option<f64> = None;
        let mut volume_value: Option<f64> = None;
        for cell in row.children().filter(|node| node.is_element()) {
            let tag = cell.tag_name().name();
            let text = input::require_text(cell)?;
            let parsed: f64 = text.parse().map_err(|_| {
                ChemkedError::Inconsistency(format!(
                    "volume-history value '{}' is not numeric",
                    text
                ))
            })?;
            if tag == time_tag {
                time_value = Some(parsed);
            } else if tag == volume_tag {
                volume_value = Some(parsed);
            }
        }
        match (time_value, volume_value) {
            (Some(t), Some(v)) => values.push([t, v]),
            _ => {
                return Err(ChemkedError::Inconsistency(
                    "incomplete volume-history datapoint".to_string(),
                ));
            }
        }
    }

    points[0].volume_history = Some(VolumeHistory {
        time: HistoryColumn {
            units: time_units,
            column: 0,
        },
        volume: HistoryColumn {
            units: volume_units,
            column: 1,
        },
        values,
    });

    Ok(())
}
