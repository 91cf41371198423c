//! The extraction run: letters → exhibitors → profile slices → rows.
//!
//! Strictly sequential. One request is in flight at a time and a failed fetch
//! never aborts the run; it only contributes no data.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::client::ExpoClient;
use crate::normalize::flatten_exhibitor;
use crate::types::{ExhibitorRow, ExhibitorSummary};

/// Where [`harvest`] reads exhibitors and profile slices from.
///
/// Both lookups are infallible: a failed fetch is reported as an empty list.
pub trait ExhibitorSource {
    fn list_exhibitors(&self, letter: char) -> impl Future<Output = Vec<ExhibitorSummary>>;

    fn list_profile_slices(&self, exh: &str) -> impl Future<Output = Vec<Value>>;
}

impl ExhibitorSource for ExpoClient {
    fn list_exhibitors(&self, letter: char) -> impl Future<Output = Vec<ExhibitorSummary>> {
        ExpoClient::list_exhibitors(self, letter)
    }

    fn list_profile_slices(&self, exh: &str) -> impl Future<Output = Vec<Value>> {
        ExpoClient::list_profile_slices(self, exh)
    }
}

/// The full key space of the directory, in visiting order.
#[must_use]
pub fn default_letters() -> Vec<char> {
    ('a'..='z').collect()
}

/// Rows collected by [`harvest`] plus counters for the run summary.
#[derive(Debug, Default)]
pub struct HarvestReport {
    pub rows: Vec<ExhibitorRow>,
    pub letters_visited: usize,
    /// Letters whose listing was empty or failed.
    pub empty_letters: usize,
    pub exhibitors: usize,
    pub skipped_without_id: usize,
    /// Exhibitors that got a placeholder row because no slices came back.
    pub without_slices: usize,
}

/// Walks `letters` in order and builds one row per (exhibitor, slice) pair.
///
/// Summaries without an identifier are skipped. After each processed
/// exhibitor the run sleeps for `inter_exhibitor_delay`.
pub async fn harvest<S: ExhibitorSource>(
    source: &S,
    letters: &[char],
    inter_exhibitor_delay: Duration,
) -> HarvestReport {
    let mut report = HarvestReport::default();

    for &letter in letters {
        report.letters_visited += 1;
        let summaries = source.list_exhibitors(letter).await;
        if summaries.is_empty() {
            report.empty_letters += 1;
        }
        tracing::info!(%letter, exhibitors = summaries.len(), "fetched directory letter");

        for summary in &summaries {
            let Some(exh) = summary.id() else {
                report.skipped_without_id += 1;
                tracing::debug!(%letter, name = ?summary.name, "skipping exhibitor without id");
                continue;
            };

            let slices = source.list_profile_slices(exh).await;
            if slices.is_empty() {
                report.without_slices += 1;
            }
            report.rows.extend(flatten_exhibitor(summary, exh, slices));
            report.exhibitors += 1;

            if !inter_exhibitor_delay.is_zero() {
                tokio::time::sleep(inter_exhibitor_delay).await;
            }
        }
    }

    report
}
