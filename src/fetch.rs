//! Blocking retrieval of the published document.
//!
//! This is intentionally minimal: one HTTP GET with a configurable timeout
//! and User-Agent. Redirects are followed by the client; anything other
//! than a 2xx final status is reported as a fetch error.

use crate::{Error, Result};
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

/// Configuration for document retrieval.
///
/// The defaults are chosen to be conservative:
/// - `user_agent` is a browser-compatible string that identifies the tool
/// - `timeout_ms` bounds the whole request at 30 seconds
///
/// # Examples
///
/// ```
/// let cfg = docgrid::FetchConfig::default();
/// assert!(cfg.user_agent.contains("docgrid"));
/// ```
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string to send with requests
    pub user_agent: String,
    /// Timeout for the document request in milliseconds
    pub timeout_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) docgrid/0.1".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// A blocking fetcher for published documents.
pub struct DocumentFetcher {
    client: Client,
    config: FetchConfig,
}

impl DocumentFetcher {
    /// Create a fetcher with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                Error::InitializationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Retrieve the document body at `url`.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let url = url::Url::parse(url)
            .map_err(|e| Error::FetchError(format!("Invalid URL {}: {}", url, e)))?;

        debug!("fetching {}", url);

        let res = self
            .client
            .get(url.clone())
            .header("User-Agent", self.config.user_agent.clone())
            .send()
            .map_err(|e| Error::FetchError(format!("Failed to fetch {}: {}", url, e)))?
            .error_for_status()
            .map_err(|e| Error::FetchError(format!("Request to {} failed: {}", url, e)))?;

        res.text()
            .map_err(|e| Error::FetchError(format!("Failed to read response body: {}", e)))
    }
}
