//! Merging several documents of one person into a single record.

use std::collections::HashMap;

use tracing::{debug, info};
use transcript_model::{PersonalId, StudentDocument, fold_key, requirement_value};

use crate::error::MergeError;

/// Check that every document belongs to the same person.
///
/// Returns the shared identifier. Blank identifiers are rejected.
pub fn validate_same_person(documents: &[StudentDocument]) -> Result<PersonalId, MergeError> {
    let first = documents.first().ok_or(MergeError::NoDocuments)?;
    let expected = first.person()?;
    for document in &documents[1..] {
        let found = document.person()?;
        if found != expected {
            return Err(MergeError::PersonalIdMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
    }
    Ok(expected)
}

/// Combine documents into one record.
///
/// Identity fields come from the first document. Subjects are keyed by
/// folded name; a later subject replaces an earlier one only with a strictly
/// higher grade on the 0-5 scale. Subjects keep first-seen order, and a
/// replacement takes the position of the record it replaces.
///
/// Assumes the documents already agree on the personal identifier; see
/// [`merge_checked`] for the validating variant.
pub fn merge(documents: &[StudentDocument]) -> StudentDocument {
    let Some(first) = documents.first() else {
        return StudentDocument::default();
    };

    let mut merged = first.identity();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut replaced = 0usize;

    for document in documents {
        for subject in &document.subjects {
            let key = fold_key(&subject.name);
            match positions.get(&key) {
                Some(&position) => {
                    let kept = &merged.subjects[position];
                    if requirement_value(&subject.grade) > requirement_value(&kept.grade) {
                        debug!(
                            subject = %subject.name,
                            kept = %kept.grade,
                            replacement = %subject.grade,
                            "Replacing subject with higher grade"
                        );
                        merged.subjects[position] = subject.clone();
                        replaced += 1;
                    }
                }
                None => {
                    positions.insert(key, merged.subjects.len());
                    merged.subjects.push(subject.clone());
                }
            }
        }
    }

    info!(
        documents = documents.len(),
        subjects = merged.subjects.len(),
        replaced,
        "Merged documents"
    );
    merged
}

/// Validate the personal identifier, then [`merge`].
pub fn merge_checked(documents: &[StudentDocument]) -> Result<StudentDocument, MergeError> {
    validate_same_person(documents)?;
    Ok(merge(documents))
}
