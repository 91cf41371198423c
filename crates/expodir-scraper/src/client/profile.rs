//! Profile listing: the slices attached to one exhibitor.

use reqwest::Url;
use serde_json::Value;

use super::ExpoClient;

impl ExpoClient {
    /// URL of the profile resource for exhibitor `exh`.
    #[must_use]
    pub fn profile_url(&self, exh: &str) -> Url {
        self.endpoint_url(&["exhibitors", exh, "slices", "profile"])
    }

    /// Fetches the profile slices of exhibitor `exh`.
    ///
    /// Returns an empty `Vec` when the fetch fails or the body carries no
    /// `slices` array. A failed fetch and an exhibitor with no profile are
    /// indistinguishable to the caller.
    pub async fn list_profile_slices(&self, exh: &str) -> Vec<Value> {
        let url = self.profile_url(exh);
        self.fetch_json(&url)
            .await
            .map(extract_slices)
            .unwrap_or_default()
    }
}

pub(crate) fn extract_slices(body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut map) => match map.remove("slices") {
            Some(Value::Array(slices)) => slices,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
