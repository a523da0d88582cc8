//! Blocking HTTP fetching and per-run page memoization.

use std::collections::hash_map::{Entry, HashMap};
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::info;

use crate::error::{Result, ToolversError};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches upstream pages and artifact bundles over HTTP/HTTPS.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher with the default 30-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("toolvers/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ToolversError::Http {
                url: String::new(),
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch `url` as text.
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        self.get(url)?.text().map_err(|e| http_error(url, e))
    }

    /// Fetch `url` as raw bytes.
    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self.get(url)?.bytes().map_err(|e| http_error(url, e))?;
        Ok(bytes.to_vec())
    }

    fn get(&self, url: &str) -> Result<Response> {
        info!("Fetching {}", url);
        let response = self.client.get(url).send().map_err(|e| http_error(url, e))?;

        if !response.status().is_success() {
            return Err(ToolversError::Http {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }
        Ok(response)
    }
}

fn http_error(url: &str, error: reqwest::Error) -> ToolversError {
    ToolversError::Http {
        url: url.to_string(),
        message: error.to_string(),
    }
}

/// Pages fetched during one run, keyed by URL.
///
/// Owned by whoever drives the run so every page is requested at most once.
#[derive(Debug, Default)]
pub struct PageCache {
    pages: HashMap<String, String>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body of `url`, fetching it on first use.
    pub fn get(&mut self, fetcher: &HttpFetcher, url: &str) -> Result<&str> {
        let body = match self.pages.entry(url.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(fetcher.fetch_text(url)?),
        };
        Ok(body.as_str())
    }

    /// Number of cached pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
