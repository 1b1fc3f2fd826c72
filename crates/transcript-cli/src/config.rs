//! File-based configuration with command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;
use transcript_catalog::CatalogConfig;
use transcript_match::{DEFAULT_MATCH_THRESHOLD, FuzzyMatcher, PERFECT_SCORE};

/// Read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "transcript.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub matching: MatchingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum similarity (0-100) for a catalog match to be accepted.
    pub threshold: u8,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

/// Catalog settings given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CatalogOverrides {
    pub primary_catalog: Option<PathBuf>,
    pub secondary_catalog: Option<PathBuf>,
    pub secondary_url: Option<String>,
    /// Never contact the remote secondary source.
    pub offline: bool,
}

impl AppConfig {
    /// Load an explicit file, or the default file when it exists, or defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    debug!("No configuration file; using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config =
            Self::from_toml(&content).with_context(|| format!("parse config {}", path.display()))?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: &CatalogOverrides) {
        if let Some(path) = &overrides.primary_catalog {
            self.catalog.primary_path.clone_from(path);
        }
        if let Some(path) = &overrides.secondary_catalog {
            self.catalog.secondary_path = Some(path.clone());
        }
        if let Some(url) = &overrides.secondary_url {
            self.catalog.secondary_url = Some(url.clone());
        }
        if overrides.offline {
            self.catalog.secondary_url = None;
        }
    }

    pub fn matcher(&self) -> FuzzyMatcher {
        FuzzyMatcher::with_threshold(self.matching.threshold)
    }

    fn validate(&self) -> Result<()> {
        if self.matching.threshold > PERFECT_SCORE {
            bail!(
                "matching.threshold must be between 0 and {PERFECT_SCORE}, got {}",
                self.matching.threshold
            );
        }
        if self.catalog.primary_path.as_os_str().is_empty() {
            bail!("catalog.primary_path must not be empty");
        }
        Ok(())
    }
}
