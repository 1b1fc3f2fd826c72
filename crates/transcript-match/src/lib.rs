#![deny(unsafe_code)]

//! Subject name reconciliation against canonical catalogs.
//!
//! [`FuzzyMatcher`] scores a raw subject name against every catalog key and
//! accepts the best candidate at or above a threshold. [`SubjectNormalizer`]
//! applies it to a whole document and rewrites matched subjects from
//! catalog data.

pub mod matcher;
pub mod normalizer;

pub use matcher::{
    CatalogMatch, DEFAULT_MATCH_THRESHOLD, FuzzyMatcher, MatchOutcome, PERFECT_SCORE,
    find_best_match, similarity,
};
pub use normalizer::{NormalizedDocument, SubjectNormalizer, normalize};
