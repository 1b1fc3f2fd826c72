//! Canonical course catalog types.
//!
//! A [`Catalog`] maps a folded course name (trimmed, lower-cased) to the
//! [`CatalogEntry`] that carries the canonical spelling, code and points.
//! Keys are unique under case-insensitive comparison; inserting a name that
//! already exists keeps the entry that was there first. Entries iterate in
//! insertion order, which for file-backed catalogs is the file order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::curriculum::CurriculumTag;
use crate::error::{ModelError, Result};
use crate::text::fold_key;

/// Which source a catalog entry was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// Local reference file.
    Primary,
    /// Legacy file or remote service.
    Secondary,
}

impl CatalogSource {
    /// Curriculum era implied by a match against this source.
    pub const fn curriculum(&self) -> CurriculumTag {
        match self {
            Self::Primary => CurriculumTag::Current,
            Self::Secondary => CurriculumTag::PreLegacy,
        }
    }
}

/// A canonical course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Canonical course name, as spelled by the source.
    pub name: String,
    /// Course code.
    pub code: String,
    /// Nominal point value, when the source declares one.
    pub points: Option<u32>,
    /// Source the entry came from.
    pub source: CatalogSource,
}

impl CatalogEntry {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        points: Option<u32>,
        source: CatalogSource,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            points,
            source,
        }
    }
}

/// Name-keyed course lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    /// Folded name to position in `entries`.
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry unless its name is already present.
    ///
    /// Returns `Ok(true)` when the entry was added and `Ok(false)` when an
    /// earlier entry with the same folded name was kept instead.
    pub fn insert(&mut self, entry: CatalogEntry) -> Result<bool> {
        let key = fold_key(&entry.name);
        if key.is_empty() {
            return Err(ModelError::EmptyCourseName { code: entry.code });
        }
        if self.index.contains_key(&key) {
            return Ok(false);
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(entry);
        Ok(true)
    }

    /// Look up an entry by course name (trimmed, case-insensitive).
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.index
            .get(&fold_key(name))
            .map(|&position| &self.entries[position])
    }

    /// Look up an entry by course code (trimmed, case-insensitive).
    pub fn find_by_code(&self, code: &str) -> Option<&CatalogEntry> {
        let wanted = fold_key(code);
        if wanted.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| fold_key(&entry.code) == wanted)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge two catalogs by name; `first` wins on collision.
    pub fn merge(first: &Catalog, second: &Catalog) -> Catalog {
        let mut merged = first.clone();
        for entry in &second.entries {
            let key = fold_key(&entry.name);
            if !merged.index.contains_key(&key) {
                merged.index.insert(key, merged.entries.len());
                merged.entries.push(entry.clone());
            }
        }
        merged
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    /// Collects entries, skipping blank names and later duplicates.
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for entry in iter {
            let name = entry.name.clone();
            match catalog.insert(entry) {
                Ok(true) => {}
                Ok(false) => debug!(course = %name, "Duplicate catalog course ignored"),
                Err(error) => warn!(%error, "Skipping catalog entry"),
            }
        }
        catalog
    }
}
