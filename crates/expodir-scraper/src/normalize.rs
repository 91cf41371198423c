//! Flattening of an exhibitor summary and its profile slices into output rows.

use serde_json::{Map, Value};

use crate::types::{ExhibitorRow, ExhibitorSummary};

/// Display text of a profile slice: its `text` string with every line break
/// turned into a single space, then trimmed.
///
/// A missing or non-string `text` yields an empty string.
#[must_use]
pub fn profile_text(slice: &Value) -> String {
    let text = slice
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or_default();
    text.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .trim()
        .to_owned()
}

/// Crosses one exhibitor with its profile slices, one row per slice.
///
/// An exhibitor without slices still yields exactly one row, built from an
/// empty placeholder object.
#[must_use]
pub fn flatten_exhibitor(
    summary: &ExhibitorSummary,
    exhibitor_id: &str,
    slices: Vec<Value>,
) -> Vec<ExhibitorRow> {
    let slices = if slices.is_empty() {
        vec![Value::Object(Map::new())]
    } else {
        slices
    };

    let field = |v: &Option<String>| v.clone().unwrap_or_default();

    slices
        .into_iter()
        .map(|slice| ExhibitorRow {
            exhibitor_id: exhibitor_id.to_owned(),
            name: field(&summary.name),
            country: field(&summary.country),
            city: field(&summary.city),
            location: field(&summary.location),
            profile_text: profile_text(&slice),
            raw_profile: slice.to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
