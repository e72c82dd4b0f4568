//! Unit spelling normalization and quantity formatting.
//!
//! ReSpecTh files are not consistent about unit spellings; this module is the
//! single place where spelling variants are reconciled. The table below covers
//! exactly the variants observed in the interchange files and is not meant to
//! be a general unit vocabulary.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Known non-canonical unit spellings mapped to their canonical form.
static UNIT_SPELLINGS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("Torr", "torr")]));

/// Normalize a raw unit token. Unknown units pass through unchanged.
pub fn normalize_unit(raw: &str) -> String {
    UNIT_SPELLINGS
        .get(raw)
        .map_or_else(|| raw.to_string(), |canonical| (*canonical).to_string())
}

/// Compose a `"<value> <unit>"` quantity string with a normalized unit.
pub fn format_quantity(value: &str, unit: &str) -> String {
    format!("{} {}", value, normalize_unit(unit))
}

/// Split a quantity string back into its `(value, unit)` parts.
///
/// The unit may itself contain spaces (e.g. `mole fraction`), so the split
/// happens at the first space only.
pub fn parse_quantity(quantity: &str) -> Option<(&str, &str)> {
    quantity.split_once(' ')
}
