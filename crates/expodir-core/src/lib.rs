pub mod app_config;
pub mod config;

pub use app_config::{
    AppConfig, DEFAULT_API_BASE_URL, DEFAULT_OUTPUT_PATH, DEFAULT_SITE_DOMAIN, DEFAULT_USER_AGENT,
};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
