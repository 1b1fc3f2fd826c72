//! Error types for merging and spec loading.

use std::path::PathBuf;

use thiserror::Error;
use transcript_model::ModelError;

/// Documents submitted for merge do not describe one person.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    #[error("no documents to merge")]
    NoDocuments,

    #[error("personal identifier mismatch: expected {expected}, found {found}")]
    PersonalIdMismatch { expected: String, found: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A requirement or merit spec could not be loaded.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpecError {
    #[error("failed to read spec {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse spec {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
