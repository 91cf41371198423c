//! Exhibitor API response types and the flattened output row.
//!
//! ## Observed shape of the directory endpoint
//!
//! A bare JSON array, one object per exhibitor:
//! `{"exh": "123", "name": "Acme", "country": "DE", "city": "Berlin", "location": "Hall 4 / B12"}`.
//! Any of the fields may be missing or `null`, and `exh` is sometimes a number
//! rather than a string. All five are modelled as `Option<String>` and scalar
//! values of any JSON type are rendered as text.
//!
//! ## Profile slices
//!
//! The profile endpoint returns `{"slices": [...]}` where each slice is an
//! open-ended object. Only `text` is interpreted; slices are kept as
//! [`serde_json::Value`] so they can be written back out verbatim.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Column order of the exported file.
pub const OUTPUT_HEADER: [&str; 7] = [
    "exhibitor_id",
    "name",
    "country",
    "city",
    "location",
    "profile_text",
    "raw_profile",
];

/// One element of the directory listing for a letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExhibitorSummary {
    #[serde(default, deserialize_with = "scalar_text")]
    pub exh: Option<String>,

    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "scalar_text")]
    pub country: Option<String>,

    #[serde(default, deserialize_with = "scalar_text")]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "scalar_text")]
    pub location: Option<String>,
}

impl ExhibitorSummary {
    /// The exhibitor identifier, or `None` when it is absent or empty.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.exh.as_deref().filter(|id| !id.is_empty())
    }
}

/// One exported row: an exhibitor crossed with one of its profile slices.
///
/// Field order is the column order of [`OUTPUT_HEADER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitorRow {
    pub exhibitor_id: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub location: String,
    pub profile_text: String,
    pub raw_profile: String,
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
