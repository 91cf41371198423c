//! Directory listing: exhibitor summaries by starting letter.

use reqwest::Url;
use serde_json::Value;

use crate::types::ExhibitorSummary;

use super::ExpoClient;

impl ExpoClient {
    /// URL of the directory listing for `letter`.
    #[must_use]
    pub fn directory_url(&self, letter: char) -> Url {
        let letter = letter.to_string();
        self.endpoint_url(&["directory", &letter])
    }

    /// Lists the exhibitors whose directory entry starts with `letter`.
    ///
    /// Returns an empty `Vec` when the fetch fails or the body is not a JSON
    /// array. Array elements that are not objects are skipped.
    pub async fn list_exhibitors(&self, letter: char) -> Vec<ExhibitorSummary> {
        let url = self.directory_url(letter);
        match self.fetch_json(&url).await {
            Some(body) => parse_directory(body, &url),
            None => Vec::new(),
        }
    }
}

pub(crate) fn parse_directory(body: Value, url: &Url) -> Vec<ExhibitorSummary> {
    let Value::Array(items) = body else {
        tracing::warn!(url = %url, "directory response is not an array");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| {
            if !item.is_object() {
                tracing::warn!(url = %url, "skipping non-object directory entry");
                return None;
            }
            serde_json::from_value::<ExhibitorSummary>(item)
                .map_err(|e| {
                    tracing::warn!(url = %url, error = %e, "skipping malformed directory entry");
                })
                .ok()
        })
        .collect()
}
