use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load run configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// Every variable is optional; unset variables fall back to [`AppConfig::default`].
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load run configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build run configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    let parse_u32 = |var: &str, default: u32| -> Result<u32, ConfigError> {
        let raw = or_default(var, &default.to_string());
        raw.trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        let raw = or_default(var, &default.to_string());
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let api_base_url = or_default("EXPODIR_API_BASE_URL", &defaults.api_base_url);
    let site_domain = or_default("EXPODIR_SITE_DOMAIN", &defaults.site_domain);
    let user_agent = or_default("EXPODIR_USER_AGENT", &defaults.user_agent);
    let log_level = or_default("EXPODIR_LOG_LEVEL", &defaults.log_level);
    let output_path = PathBuf::from(or_default(
        "EXPODIR_OUTPUT_PATH",
        &defaults.output_path.to_string_lossy(),
    ));

    let request_timeout_secs =
        parse_u64("EXPODIR_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
    let max_attempts = parse_u32("EXPODIR_MAX_ATTEMPTS", defaults.max_attempts)?;
    if max_attempts == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "EXPODIR_MAX_ATTEMPTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let retry_backoff_base_ms =
        parse_u64("EXPODIR_RETRY_BACKOFF_BASE_MS", defaults.retry_backoff_base_ms)?;
    let inter_exhibitor_delay_ms = parse_u64(
        "EXPODIR_INTER_EXHIBITOR_DELAY_MS",
        defaults.inter_exhibitor_delay_ms,
    )?;

    Ok(AppConfig {
        api_base_url,
        site_domain,
        user_agent,
        log_level,
        output_path,
        request_timeout_secs,
        max_attempts,
        retry_backoff_base_ms,
        inter_exhibitor_delay_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
