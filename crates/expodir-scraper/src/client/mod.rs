//! HTTP client for the exhibitor directory API.

mod directory;
mod profile;

use std::time::Duration;

use expodir_core::AppConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ScraperError;
use crate::rate_limit::retry_with_backoff;

/// Header the backend uses to route a request to the right event site.
pub const SITE_DOMAIN_HEADER: &str = "x-vis-domain";

/// Client for the exhibitor directory and profile endpoints.
///
/// Every request carries `Accept: application/json`, the configured
/// `User-Agent`, and the site-routing header. Transient failures are retried
/// with exponential backoff inside [`ExpoClient::try_fetch_json`].
pub struct ExpoClient {
    client: Client,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl ExpoClient {
    /// Builds a client from the run configuration.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `api_base_url` does not parse or
    ///   cannot carry path segments.
    /// - [`ScraperError::InvalidHeader`] if `site_domain` is not a valid header value.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let base_url =
            Url::parse(&config.api_base_url).map_err(|e| ScraperError::InvalidBaseUrl {
                base_url: config.api_base_url.clone(),
                reason: e.to_string(),
            })?;
        if base_url.cannot_be_a_base() {
            return Err(ScraperError::InvalidBaseUrl {
                base_url: config.api_base_url.clone(),
                reason: "URL cannot carry a path".to_owned(),
            });
        }

        let site_domain =
            HeaderValue::from_str(&config.site_domain).map_err(|e| ScraperError::InvalidHeader {
                name: SITE_DOMAIN_HEADER,
                reason: e.to_string(),
            })?;
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(SITE_DOMAIN_HEADER), site_domain);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url,
            max_retries: config.max_retries(),
            backoff_base_ms: config.retry_backoff_base_ms,
        })
    }

    /// GETs `url` and parses the body as JSON, logging and swallowing any
    /// failure.
    ///
    /// Returns `None` when the request fails after retries, the status is not
    /// 2xx, or the body is not JSON. Callers treat `None` as "no data".
    pub async fn fetch_json(&self, url: &Url) -> Option<Value> {
        match self.try_fetch_json(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "request failed, treating as no data");
                None
            }
        }
    }

    /// GETs `url` and parses the body as JSON, retrying transient failures.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on network failure after all retries.
    /// - [`ScraperError::UnexpectedStatus`] on a non-2xx status (500/502/503/504
    ///   only after all retries).
    /// - [`ScraperError::Deserialize`] if the body is not valid JSON (not retried).
    pub async fn try_fetch_json(&self, url: &Url) -> Result<Value, ScraperError> {
        let client = &self.client;
        retry_with_backoff(self.max_retries, self.backoff_base_ms, move || async move {
            let response = client.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(ScraperError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            let body = response.text().await?;
            serde_json::from_str::<Value>(&body).map_err(|e| ScraperError::Deserialize {
                context: url.to_string(),
                source: e,
            })
        })
        .await
    }

    /// Appends `segments` to the base URL path, percent-encoding each one.
    fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
