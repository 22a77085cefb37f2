//! HTTP client for the zip-codes.com directory pages.

mod aggregate;
mod query;

use std::time::Duration;

use reqwest::{Client, Url};
use zipscan_core::AppConfig;

use crate::error::ScraperError;

/// Client for the directory site's HTML search pages.
///
/// Requests run one at a time on the caller's task; nothing is retried,
/// rate-limited, or cached. Use [`ZipCodesClient::from_app_config`] for the
/// configured site or [`ZipCodesClient::with_base_url`] to point at a mock
/// server in tests.
#[derive(Debug, Clone)]
pub struct ZipCodesClient {
    client: Client,
    base_url: String,
}

impl ZipCodesClient {
    /// Creates a client from process configuration.
    ///
    /// # Errors
    ///
    /// See [`ZipCodesClient::with_base_url`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::with_base_url(
            &config.base_url,
            config.request_timeout_secs,
            config.connect_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client rooted at `base_url` with explicit request and
    /// connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute URL and [`ScraperError::Client`] if the `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: trimmed.to_owned(),
        })
    }

    /// Issues a single GET and returns the body text.
    ///
    /// HTTP status is not interpreted: a non-2xx response is logged and its
    /// body returned like any other page.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Network`] when the request cannot complete
    /// (DNS, connect, timeout, reset) or the body cannot be read.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let network = |source: reqwest::Error| ScraperError::Network {
            url: url.to_owned(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "non-success status; using body as-is");
        }

        let body = response.text().await.map_err(network)?;
        tracing::debug!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}
