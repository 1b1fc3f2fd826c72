//! Document-wide subject normalization.
//!
//! Every subject is snapshotted into its `original_*` fields, matched, and on
//! a match rewritten with the canonical catalog name, code and points.
//! Unmatched subjects are kept unchanged apart from their recorded score.
//!
//! The document curriculum tag follows the last matched subject, so a
//! document that mixes eras reports whichever era was matched last.

use serde::Serialize;
use tracing::{debug, info};
use transcript_model::{Catalog, StudentDocument, SubjectRecord};

use crate::matcher::{FuzzyMatcher, MatchOutcome};

/// A normalized copy of a document plus what could not be reconciled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedDocument {
    pub document: StudentDocument,
    /// Names of subjects with no acceptable catalog match, in document order.
    pub unmatched: Vec<String>,
    /// Sum of parsed subject points after normalization.
    pub total_points: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct SubjectNormalizer<'a> {
    matcher: FuzzyMatcher,
    primary: &'a Catalog,
    secondary: Option<&'a Catalog>,
}

impl<'a> SubjectNormalizer<'a> {
    pub fn new(primary: &'a Catalog, secondary: Option<&'a Catalog>) -> Self {
        Self {
            matcher: FuzzyMatcher::new(),
            primary,
            secondary,
        }
    }

    #[must_use]
    pub fn with_matcher(mut self, matcher: FuzzyMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Normalize a single subject, returning the rewritten record and the match outcome.
    pub fn normalize_subject(&self, subject: &SubjectRecord) -> (SubjectRecord, MatchOutcome) {
        let mut record = subject.clone();
        record.original_name = Some(subject.name.clone());
        record.original_code = subject.course_code.clone();
        record.original_points = subject.points.clone();

        let outcome = self
            .matcher
            .find_best_match(&subject.name, self.primary, self.secondary);
        record.fuzzy_match_score = Some(outcome.score);

        if let Some(found) = &outcome.best {
            record.name = found.entry.name.clone();
            record.course_code = Some(found.entry.code.clone());
            record.points = found.entry.points.map(|points| points.to_string());
            record.curriculum = Some(found.tag);
        }

        (record, outcome)
    }

    /// Normalize every subject of `document`.
    pub fn normalize(&self, document: &StudentDocument) -> NormalizedDocument {
        let mut normalized = document.identity();
        let mut unmatched = Vec::new();

        for subject in &document.subjects {
            let (record, outcome) = self.normalize_subject(subject);
            match &outcome.best {
                Some(found) => normalized.curriculum = Some(found.tag),
                None => {
                    info!(
                        subject = %subject.name,
                        score = outcome.score,
                        "Unmatched subject"
                    );
                    unmatched.push(subject.name.clone());
                }
            }
            normalized.subjects.push(record);
        }

        let total_points = normalized.total_points();
        debug!(
            subjects = normalized.subjects.len(),
            unmatched = unmatched.len(),
            total_points,
            "Normalized document"
        );

        NormalizedDocument {
            document: normalized,
            unmatched,
            total_points,
        }
    }
}

/// Normalize `document` with the default matcher.
pub fn normalize(
    document: &StudentDocument,
    primary: &Catalog,
    secondary: Option<&Catalog>,
) -> NormalizedDocument {
    SubjectNormalizer::new(primary, secondary).normalize(document)
}
