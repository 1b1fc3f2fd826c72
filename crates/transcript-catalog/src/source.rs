//! Secondary catalog sources.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::debug;
use transcript_model::Catalog;

use crate::error::{CatalogError, Result};
use crate::loader::{load_secondary_catalog, parse_remote_catalog};

/// User agent string for remote requests.
const USER_AGENT_VALUE: &str = concat!("transcript-catalog/", env!("CARGO_PKG_VERSION"));

/// Something that can produce a fresh secondary catalog.
pub trait SecondarySource: Send + Sync {
    /// Fetch the full catalog.
    fn fetch(&self) -> Result<Catalog>;

    /// Short description for log messages.
    fn describe(&self) -> String;
}

/// Primary-only operation: the secondary catalog is always empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSecondarySource;

impl SecondarySource for NoSecondarySource {
    fn fetch(&self) -> Result<Catalog> {
        Ok(Catalog::new())
    }

    fn describe(&self) -> String {
        "none".to_string()
    }
}

/// Secondary catalog read from a local JSON array file.
#[derive(Debug, Clone)]
pub struct FileSecondarySource {
    path: PathBuf,
}

impl FileSecondarySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SecondarySource for FileSecondarySource {
    fn fetch(&self) -> Result<Catalog> {
        load_secondary_catalog(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Secondary catalog fetched from an HTTP service.
#[derive(Debug, Clone)]
pub struct RemoteSecondarySource {
    client: Client,
    url: String,
}

impl RemoteSecondarySource {
    /// Create a source for `url`; every request is bounded by `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT_VALUE)
            .build()
            .map_err(|e| CatalogError::Network {
                url: url.clone(),
                message: format!("failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn request_error(&self, error: &reqwest::Error) -> CatalogError {
        if error.is_timeout() {
            CatalogError::Timeout {
                url: self.url.clone(),
            }
        } else {
            CatalogError::Network {
                url: self.url.clone(),
                message: error.to_string(),
            }
        }
    }
}

impl SecondarySource for RemoteSecondarySource {
    fn fetch(&self) -> Result<Catalog> {
        debug!(url = %self.url, "Fetching remote catalog");

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| self.request_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(CatalogError::Network {
                url: self.url.clone(),
                message: format!("HTTP {status}: {message}"),
            });
        }

        let body = response.text().map_err(|e| self.request_error(&e))?;
        parse_remote_catalog(&body, &self.url)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
