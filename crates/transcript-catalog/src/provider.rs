//! Process-wide catalog cache.
//!
//! The primary catalog is loaded once and kept for the life of the provider.
//! The secondary catalog is cached with a time-based expiry; the first caller
//! after expiry refetches it. The cache lock is held across the fetch, so
//! concurrent callers during a miss wait for the one in-flight fetch instead
//! of issuing their own.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};
use transcript_model::Catalog;

use crate::clock::{Clock, SystemClock};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::loader::load_primary_catalog;
use crate::source::{
    FileSecondarySource, NoSecondarySource, RemoteSecondarySource, SecondarySource,
};

/// Cached secondary catalog.
struct CachedCatalog {
    catalog: Arc<Catalog>,
    fetched_at: Instant,
}

/// Primary and secondary catalogs, as handed to the matcher.
#[derive(Debug, Clone)]
pub struct CatalogSet {
    pub primary: Arc<Catalog>,
    pub secondary: Arc<Catalog>,
}

impl CatalogSet {
    /// Both catalogs merged by name, primary first.
    pub fn combined(&self) -> Catalog {
        Catalog::merge(&self.primary, &self.secondary)
    }
}

pub struct CatalogProvider {
    config: CatalogConfig,
    source: Box<dyn SecondarySource>,
    clock: Arc<dyn Clock>,
    primary: Mutex<Option<Arc<Catalog>>>,
    secondary: Mutex<Option<CachedCatalog>>,
}

impl CatalogProvider {
    /// Create a provider with an explicit secondary source and the system clock.
    pub fn new(config: CatalogConfig, source: impl SecondarySource + 'static) -> Self {
        Self {
            config,
            source: Box::new(source),
            clock: Arc::new(SystemClock),
            primary: Mutex::new(None),
            secondary: Mutex::new(None),
        }
    }

    /// Create a provider whose secondary source follows the configuration:
    /// a remote URL when set, else a secondary file, else none.
    pub fn from_config(config: CatalogConfig) -> Result<Self> {
        if let Some(url) = config.secondary_url.clone() {
            let source = RemoteSecondarySource::new(url, config.request_timeout())?;
            return Ok(Self::new(config, source));
        }
        if let Some(path) = config.secondary_path.clone() {
            return Ok(Self::new(config, FileSecondarySource::new(path)));
        }
        Ok(Self::new(config, NoSecondarySource))
    }

    /// Replace the time source used for expiry.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn ttl(&self) -> Duration {
        self.config.cache_ttl()
    }

    /// The primary catalog, loaded from disk on first use.
    pub fn primary_catalog(&self) -> Result<Arc<Catalog>> {
        let mut cache = lock(&self.primary);
        if let Some(catalog) = cache.as_ref() {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(load_primary_catalog(&self.config.primary_path)?);
        info!(
            path = %self.config.primary_path.display(),
            courses = catalog.len(),
            "Primary catalog loaded"
        );
        *cache = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// The secondary catalog, refetched when the cached copy has expired.
    ///
    /// A failed refetch leaves any expired copy in place and returns the error.
    pub fn secondary_catalog(&self) -> Result<Arc<Catalog>> {
        let mut cache = lock(&self.secondary);
        let now = self.clock.now();
        if let Some(cached) = cache.as_ref() {
            let age = now.saturating_duration_since(cached.fetched_at);
            if age < self.ttl() {
                debug!(age = ?age, "Using cached secondary catalog");
                return Ok(Arc::clone(&cached.catalog));
            }
        }

        info!(source = %self.source.describe(), "Fetching secondary catalog");
        let catalog = Arc::new(self.source.fetch()?);
        *cache = Some(CachedCatalog {
            catalog: Arc::clone(&catalog),
            fetched_at: self.clock.now(),
        });
        Ok(catalog)
    }

    /// The secondary catalog, or the last good copy when a refetch fails.
    ///
    /// With nothing cached the result is an empty catalog, so callers fall
    /// back to primary-only canonicalization.
    pub fn secondary_catalog_or_stale(&self) -> Arc<Catalog> {
        match self.secondary_catalog() {
            Ok(catalog) => catalog,
            Err(error) => {
                let stale = lock(&self.secondary)
                    .as_ref()
                    .map(|cached| Arc::clone(&cached.catalog));
                match stale {
                    Some(catalog) => {
                        warn!(%error, "Secondary catalog refetch failed; serving stale copy");
                        catalog
                    }
                    None => {
                        warn!(%error, "Secondary catalog unavailable; using primary only");
                        Arc::new(Catalog::new())
                    }
                }
            }
        }
    }

    /// Both catalogs merged by name, primary taking precedence.
    pub fn combined_catalog(&self) -> Result<Arc<Catalog>> {
        let primary = self.primary_catalog()?;
        let secondary = self.secondary_catalog()?;
        Ok(Arc::new(Catalog::merge(&primary, &secondary)))
    }

    /// Primary catalog plus the best available secondary catalog.
    pub fn catalogs(&self) -> Result<CatalogSet> {
        Ok(CatalogSet {
            primary: self.primary_catalog()?,
            secondary: self.secondary_catalog_or_stale(),
        })
    }

    /// Drop the cached secondary catalog; the next caller refetches.
    pub fn invalidate(&self) {
        *lock(&self.secondary) = None;
    }

    /// Drop both cached catalogs.
    pub fn invalidate_all(&self) {
        *lock(&self.primary) = None;
        self.invalidate();
    }
}

impl std::fmt::Debug for CatalogProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogProvider")
            .field("config", &self.config)
            .field("source", &self.source.describe())
            .finish_non_exhaustive()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
