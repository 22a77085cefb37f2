//! Shared types for `zipscan`: query parameters, tabular records,
//! configuration loading, and JSON import/export.

mod app_config;
mod config;
pub mod json_io;
pub mod query;
pub mod records;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, load_scrape_config};
pub use json_io::{export_json, import_json};
pub use query::{CountyQuery, RadiusQuery, ScrapeConfig};
pub use records::{CoordinateRecord, CountyRecord, RadiusRecord, Tabular};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse JSON document {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to serialize JSON document: {0}")]
    Serialize(#[source] serde_json::Error),
}
