//! Canonical course catalogs.
//!
//! This crate provides:
//!
//! - **Loaders** for the primary reference file (an object keyed by course
//!   name) and the secondary legacy file (a flat array of records)
//! - **Secondary sources** behind the [`SecondarySource`] trait: a file, a
//!   remote HTTP service, or nothing at all
//! - **[`CatalogProvider`]**, a process-wide cache that loads the primary
//!   catalog once and refetches the secondary catalog after a time-based
//!   expiry, with at most one fetch in flight
//!
//! # Example
//!
//! ```rust,ignore
//! use transcript_catalog::{CatalogConfig, CatalogProvider};
//!
//! let provider = CatalogProvider::from_config(CatalogConfig::default())?;
//! let catalogs = provider.catalogs()?;
//! println!("{} primary courses", catalogs.primary.len());
//! ```

#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod error;
pub mod loader;
pub mod provider;
pub mod source;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CatalogConfig, DEFAULT_CACHE_TTL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
pub use error::{CatalogError, Result};
pub use loader::{
    load_primary_catalog, load_secondary_catalog, parse_primary_catalog, parse_remote_catalog,
    parse_secondary_catalog,
};
pub use provider::{CatalogProvider, CatalogSet};
pub use source::{FileSecondarySource, NoSecondarySource, RemoteSecondarySource, SecondarySource};
