//! Retry with exponential backoff for the exhibitor API client.
//!
//! Only connection-level failures and the gateway-style 5xx statuses are
//! retried. Everything else (4xx, other 5xx, malformed bodies) is returned on
//! the first failure.

use std::future::Future;
use std::time::Duration;

use crate::error::ScraperError;

/// HTTP statuses that trigger a retry.
pub const RETRYABLE_STATUSES: [u16; 4] = [500, 502, 503, 504];

/// Returns `true` if `err` represents a transient condition that should be
/// retried after a backoff delay.
///
/// Retriable errors:
/// - [`ScraperError::Http`] for connect, timeout, send, and body-read failures.
/// - [`ScraperError::UnexpectedStatus`] when the status is in [`RETRYABLE_STATUSES`].
///
/// Everything else, including [`ScraperError::Deserialize`], is returned
/// immediately.
pub(crate) fn is_retriable(err: &ScraperError) -> bool {
    match err {
        ScraperError::Http(e) => e.is_connect() || e.is_timeout() || e.is_request() || e.is_body(),
        ScraperError::UnexpectedStatus { status, .. } => RETRYABLE_STATUSES.contains(status),
        ScraperError::Deserialize { .. }
        | ScraperError::InvalidBaseUrl { .. }
        | ScraperError::InvalidHeader { .. } => false,
    }
}

/// Executes `operation`, retrying transient failures up to `max_retries`
/// additional times.
///
/// The wait before the n-th retry is `backoff_base_ms * 2^(n-1)` milliseconds.
///
/// | Attempt | Sleep before it (`backoff_base_ms = 1_000`) |
/// |---------|---------------------------------------------|
/// | 1       | none                                        |
/// | 2       | 1 s                                         |
/// | 3       | 2 s                                         |
/// | 4       | 4 s                                         |
/// | 5       | 8 s                                         |
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, ScraperError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScraperError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        let delay_ms = backoff_base_ms.saturating_mul(1u64 << attempt.min(32));
        attempt += 1;
        tracing::warn!(
            attempt,
            max_retries,
            delay_ms,
            error = %err,
            "transient request error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}
