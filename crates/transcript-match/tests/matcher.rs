use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;
use transcript_catalog::load_primary_catalog;
use transcript_match::{FuzzyMatcher, find_best_match, similarity};
use transcript_model::{Catalog, CatalogEntry, CatalogSource, CurriculumTag};

fn primary() -> Catalog {
    [
        CatalogEntry::new("Matematik 1a", "MATMAT01a", Some(100), CatalogSource::Primary),
        CatalogEntry::new("Svenska 1", "SVESVE01", Some(100), CatalogSource::Primary),
        CatalogEntry::new("Engelska 5", "ENGENG05", Some(100), CatalogSource::Primary),
    ]
    .into_iter()
    .collect()
}

fn secondary() -> Catalog {
    [
        CatalogEntry::new("Matematik A", "MA1201", Some(100), CatalogSource::Secondary),
        CatalogEntry::new("Svenska B", "SV1202", Some(100), CatalogSource::Secondary),
    ]
    .into_iter()
    .collect()
}

#[test]
fn different_casing_matches_with_perfect_score() {
    let outcome = find_best_match("Matematik 1A", &primary(), Some(&secondary()));
    assert_eq!(outcome.score, 100);
    assert_eq!(outcome.matched_name(), Some("Matematik 1a"));
    assert_eq!(outcome.best.unwrap().tag, CurriculumTag::Current);
}

#[test]
fn better_secondary_match_is_tagged_legacy() {
    let outcome = find_best_match("Matematik A", &primary(), Some(&secondary()));
    let best = outcome.best.expect("secondary match");
    assert_eq!(best.entry.code, "MA1201");
    assert_eq!(best.tag, CurriculumTag::PreLegacy);
    assert_eq!(outcome.score, 100);
}

#[test]
fn below_threshold_reports_best_score() {
    let outcome = find_best_match("Fysik 1a", &primary(), Some(&secondary()));
    assert!(!outcome.is_match());
    assert!(outcome.score < 80);

    let expected = primary()
        .iter()
        .chain(secondary().iter())
        .map(|entry| similarity("Fysik 1a", &entry.name))
        .max()
        .unwrap();
    assert_eq!(outcome.score, expected);
    assert!(outcome.candidate.is_some());
}

#[test]
fn missing_secondary_catalog_only_searches_primary() {
    let outcome = FuzzyMatcher::new().find_best_match("Matematik A", &primary(), None);
    assert!(outcome.score < 100);
    let best = outcome.best.expect("close primary match");
    assert_eq!(best.entry.code, "MATMAT01a");
    assert_eq!(best.tag, CurriculumTag::Current);
}

#[test]
fn equal_scores_go_to_earlier_course_in_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courses.json");
    fs::write(
        &path,
        r#"{
            "Matematik 1b": {"code": "MATMAT01b", "points": 100},
            "Matematik 1a": {"code": "MATMAT01a", "points": 100}
        }"#,
    )
    .unwrap();
    let catalog = load_primary_catalog(&path).unwrap();
    assert_eq!(
        similarity("Matematik 1c", "Matematik 1a"),
        similarity("Matematik 1c", "Matematik 1b")
    );

    let outcome = find_best_match("Matematik 1c", &catalog, None);
    assert_eq!(outcome.matched_name(), Some("Matematik 1b"));
    assert_eq!(outcome.best.unwrap().entry.code, "MATMAT01b");
}

proptest! {
    #[test]
    fn any_casing_of_a_key_matches_that_key(
        base in "[a-z]{3,12}( [a-z0-9]{1,3})?",
        upper_mask in proptest::collection::vec(any::<bool>(), 16),
    ) {
        let cased: String = base
            .chars()
            .enumerate()
            .map(|(i, c)| if upper_mask[i % upper_mask.len()] { c.to_ascii_uppercase() } else { c })
            .collect();
        let catalog: Catalog = [CatalogEntry::new(base.clone(), "CODE", None, CatalogSource::Primary)]
            .into_iter()
            .collect();

        let outcome = find_best_match(&cased, &catalog, None);
        prop_assert_eq!(outcome.score, 100);
        prop_assert_eq!(outcome.matched_name(), Some(base.as_str()));
    }

    #[test]
    fn accepted_matches_meet_the_threshold(name in "[A-Za-z ]{1,20}") {
        let outcome = find_best_match(&name, &primary(), Some(&secondary()));
        if outcome.is_match() {
            prop_assert!(outcome.score >= 80);
        } else {
            prop_assert!(outcome.score < 80);
        }
    }
}
