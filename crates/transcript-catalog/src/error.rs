//! Error types for catalog loading.

use std::path::PathBuf;

use thiserror::Error;
use transcript_model::ModelError;

/// Errors that can occur while loading or fetching a catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON of the expected shape.
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog file contains an entry the model rejects.
    #[error("invalid entry in catalog {path}: {source}")]
    InvalidEntry {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    /// Remote source could not be reached or answered with an error status.
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// Remote source did not answer within the request timeout.
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// Remote source answered with a body of the wrong shape.
    #[error("malformed catalog response from {url}: {message}")]
    RemotePayload { url: String, message: String },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns whether a later retry may succeed.
    ///
    /// File errors are configuration problems and never retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Timeout { .. } | Self::RemotePayload { .. }
        )
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_remote_failures_are_retryable() {
        let timeout = CatalogError::Timeout {
            url: "http://localhost".into(),
        };
        assert!(timeout.is_retryable());

        let io = CatalogError::io(
            "courses.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(!io.is_retryable());
        assert!(io.to_string().contains("courses.json"));
    }
}
