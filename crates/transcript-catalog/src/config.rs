//! Catalog provider configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Secondary catalog lifetime before a refetch (one hour).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Remote request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Where catalogs come from and how long the secondary one stays fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Primary reference file (object keyed by course name).
    pub primary_path: PathBuf,
    /// Secondary legacy file (array of records).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_path: Option<PathBuf>,
    /// Remote secondary service. Takes precedence over `secondary_path`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_url: Option<String>,
    pub cache_ttl_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            primary_path: PathBuf::from("data/courses.json"),
            secondary_path: None,
            secondary_url: None,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl CatalogConfig {
    /// Create a configuration for a primary file with default settings.
    pub fn with_primary(path: impl Into<PathBuf>) -> Self {
        Self {
            primary_path: path.into(),
            ..Self::default()
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
