use std::path::PathBuf;

/// Root of the K-Online visitor API; both endpoints hang off this.
pub const DEFAULT_API_BASE_URL: &str = "https://www.k-online.com/vis-api/vis/v1/en";

/// Site the backend routes requests to. Sent on every request.
pub const DEFAULT_SITE_DOMAIN: &str = "www.k-online.com";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 6.0; Nexus 5 Build/MRA58N) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/139.0.0.0 Mobile Safari/537.36";

pub const DEFAULT_OUTPUT_PATH: &str = "exhibitors_full.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub site_domain: String,
    pub user_agent: String,
    pub log_level: String,
    pub output_path: PathBuf,
    pub request_timeout_secs: u64,
    /// Total attempts per request, including the first. Always at least 1.
    pub max_attempts: u32,
    pub retry_backoff_base_ms: u64,
    pub inter_exhibitor_delay_ms: u64,
}

impl AppConfig {
    /// Number of retries after the first attempt.
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_attempts.saturating_sub(1)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            site_domain: DEFAULT_SITE_DOMAIN.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            log_level: "info".to_owned(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            request_timeout_secs: 10,
            max_attempts: 5,
            retry_backoff_base_ms: 1_000,
            inter_exhibitor_delay_ms: 500,
        }
    }
}
