use std::path::{Path, PathBuf};

use crate::app_config::AppConfig;
use crate::query::ScrapeConfig;
use crate::ConfigError;

const DEFAULT_BASE_URL: &str = "https://www.zip-codes.com";
const DEFAULT_USER_AGENT: &str = "zipscan/0.1 (postal-code-metadata)";
const DEFAULT_CONFIG_PATH: &str = "./scrape_config.json";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so the only failure mode is a present but
/// unparseable number.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let base_url = or_default("ZIPSCAN_BASE_URL", DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string();
    if base_url.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "ZIPSCAN_BASE_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let request_timeout_secs = parse_u64("ZIPSCAN_REQUEST_TIMEOUT_SECS", "30")?;
    let connect_timeout_secs = parse_u64("ZIPSCAN_CONNECT_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("ZIPSCAN_USER_AGENT", DEFAULT_USER_AGENT);
    let config_path = PathBuf::from(or_default("ZIPSCAN_CONFIG_PATH", DEFAULT_CONFIG_PATH));
    let log_level = or_default("ZIPSCAN_LOG_LEVEL", "info");

    Ok(AppConfig {
        base_url,
        request_timeout_secs,
        connect_timeout_secs,
        user_agent,
        config_path,
        log_level,
    })
}

/// Load the query document holding `within_radius` and `county` parameters.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is not valid JSON of the expected shape.
pub fn load_scrape_config(path: &Path) -> Result<ScrapeConfig, ConfigError> {
    crate::json_io::import_json(path)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
