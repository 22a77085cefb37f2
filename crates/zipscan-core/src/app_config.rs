use std::path::PathBuf;

/// Process-wide settings read from the environment once at start-up.
///
/// Passed explicitly to the scraper client and CLI handlers; nothing in the
/// library crates reads the environment on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the postal-code directory site, without a trailing slash.
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    /// Location of the JSON query document (`within_radius` / `county`).
    pub config_path: PathBuf,
    pub log_level: String,
}
