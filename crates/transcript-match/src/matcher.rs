//! Best-match search across the primary and secondary catalogs.
//!
//! Similarity is the indel-based ratio of the lower-cased names, rounded to
//! an integer percentage. The primary catalog is always searched. The
//! secondary catalog is searched only when the primary best is short of a
//! perfect score, and it wins only with a strictly higher score.

use rapidfuzz::distance::indel;
use serde::Serialize;
use tracing::debug;
use transcript_model::{Catalog, CatalogEntry, CurriculumTag, fold_key};

/// Minimum similarity for a match to be accepted.
pub const DEFAULT_MATCH_THRESHOLD: u8 = 80;

/// Score of an exact (case-insensitive) match.
pub const PERFECT_SCORE: u8 = 100;

/// Case-insensitive similarity of two names, 0-100.
pub fn similarity(a: &str, b: &str) -> u8 {
    let a = fold_key(a);
    let b = fold_key(b);
    let ratio = indel::normalized_similarity(a.chars(), b.chars());
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// An accepted catalog match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogMatch {
    /// The matched catalog entry (canonical name, code, points).
    pub entry: CatalogEntry,
    /// Era of the catalog that produced the match.
    pub tag: CurriculumTag,
}

/// Result of a best-match search.
///
/// `score` is the best similarity observed even when the match was rejected,
/// so callers can record it for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub best: Option<CatalogMatch>,
    pub score: u8,
    /// Closest catalog name, accepted or not.
    pub candidate: Option<String>,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        self.best.is_some()
    }

    /// Canonical name of the accepted match.
    pub fn matched_name(&self) -> Option<&str> {
        self.best.as_ref().map(|m| m.entry.name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatcher {
    threshold: u8,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_threshold(threshold: u8) -> Self {
        Self {
            threshold: threshold.min(PERFECT_SCORE),
        }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Find the best catalog match for `name`.
    pub fn find_best_match(
        &self,
        name: &str,
        primary: &Catalog,
        secondary: Option<&Catalog>,
    ) -> MatchOutcome {
        let primary_best = best_in(name, primary);
        let primary_score = primary_best.map_or(0, |(_, score)| score);

        let mut winner = primary_best.map(|(entry, score)| (entry, score, CurriculumTag::Current));
        if primary_score < PERFECT_SCORE
            && let Some(secondary) = secondary
            && let Some((entry, score)) = best_in(name, secondary)
            && score > primary_score
        {
            winner = Some((entry, score, CurriculumTag::PreLegacy));
        }

        let Some((entry, score, tag)) = winner else {
            debug!(subject = name, "No catalog candidates");
            return MatchOutcome {
                best: None,
                score: 0,
                candidate: None,
            };
        };

        if score >= self.threshold {
            debug!(
                subject = name,
                matched = %entry.name,
                score,
                era = %tag,
                "Fuzzy match accepted"
            );
            MatchOutcome {
                best: Some(CatalogMatch {
                    entry: entry.clone(),
                    tag,
                }),
                score,
                candidate: Some(entry.name.clone()),
            }
        } else {
            debug!(
                subject = name,
                closest = %entry.name,
                score,
                threshold = self.threshold,
                "No match above threshold"
            );
            MatchOutcome {
                best: None,
                score,
                candidate: Some(entry.name.clone()),
            }
        }
    }
}

/// Find the best match using the default threshold.
pub fn find_best_match(name: &str, primary: &Catalog, secondary: Option<&Catalog>) -> MatchOutcome {
    FuzzyMatcher::new().find_best_match(name, primary, secondary)
}

/// Highest-scoring entry of one catalog; the first entry reaching the maximum is kept.
fn best_in<'c>(name: &str, catalog: &'c Catalog) -> Option<(&'c CatalogEntry, u8)> {
    let mut best: Option<(&CatalogEntry, u8)> = None;
    for entry in catalog.iter() {
        let score = similarity(name, &entry.name);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((entry, score));
            if score == PERFECT_SCORE {
                break;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use transcript_model::CatalogSource;

    fn catalog(names: &[(&str, &str)], source: CatalogSource) -> Catalog {
        names
            .iter()
            .map(|(name, code)| CatalogEntry::new(*name, *code, Some(100), source))
            .collect()
    }

    #[test]
    fn identical_names_score_perfect() {
        assert_eq!(similarity("Matematik 1A", "matematik 1a"), 100);
        assert_eq!(similarity("  Svenska 1", "Svenska 1 "), 100);
    }

    #[test]
    fn secondary_not_consulted_after_perfect_primary() {
        let primary = catalog(&[("Matematik 1a", "MATMAT01a")], CatalogSource::Primary);
        let secondary = catalog(&[("matematik 1a", "MA1201")], CatalogSource::Secondary);

        let outcome = find_best_match("MATEMATIK 1A", &primary, Some(&secondary));
        let best = outcome.best.unwrap();
        assert_eq!(best.entry.code, "MATMAT01a");
        assert_eq!(best.tag, CurriculumTag::Current);
    }

    #[test]
    fn equal_secondary_score_keeps_primary() {
        let primary = catalog(&[("Engelska 5x", "ENGENG05")], CatalogSource::Primary);
        let secondary = catalog(&[("Engelska 5y", "EN1201")], CatalogSource::Secondary);

        let outcome = find_best_match("Engelska 5", &primary, Some(&secondary));
        assert_eq!(outcome.best.unwrap().tag, CurriculumTag::Current);
    }

    #[test]
    fn empty_catalogs_report_no_candidate() {
        let outcome = find_best_match("Svenska 1", &Catalog::new(), None);
        assert!(!outcome.is_match());
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.candidate, None);
    }

    #[test]
    fn threshold_is_configurable() {
        let primary = catalog(&[("Matematik 1a", "MATMAT01a")], CatalogSource::Primary);
        let score = similarity("Matematik 1", "Matematik 1a");
        let strict = FuzzyMatcher::with_threshold(score + 1);
        assert!(!strict.find_best_match("Matematik 1", &primary, None).is_match());
        let lenient = FuzzyMatcher::with_threshold(score);
        assert!(lenient.find_best_match("Matematik 1", &primary, None).is_match());
    }
}
