use transcript_match::{FuzzyMatcher, SubjectNormalizer, normalize};
use transcript_model::{
    Catalog, CatalogEntry, CatalogSource, CurriculumTag, StudentDocument, SubjectRecord,
};

fn primary() -> Catalog {
    [CatalogEntry::new("Matematik 1a", "MATMAT01a", Some(100), CatalogSource::Primary)]
        .into_iter()
        .collect()
}

fn secondary() -> Catalog {
    [CatalogEntry::new("Svenska A", "SV1201", Some(200), CatalogSource::Secondary)]
        .into_iter()
        .collect()
}

fn document(subjects: Vec<SubjectRecord>) -> StudentDocument {
    StudentDocument {
        full_name: "Anna Andersson".into(),
        personal_id: "199001011234".into(),
        title: "Examensbevis".into(),
        school_form: "Gymnasieskola".into(),
        curriculum: None,
        subjects,
    }
}

#[test]
fn rewrites_matched_subject_from_catalog() {
    let input = document(vec![SubjectRecord::new("Matematik 1A", "C").with_points("50")]);
    let result = normalize(&input, &primary(), None);

    let subject = &result.document.subjects[0];
    assert_eq!(subject.name, "Matematik 1a");
    assert_eq!(subject.course_code.as_deref(), Some("MATMAT01a"));
    assert_eq!(subject.points.as_deref(), Some("100"));
    assert_eq!(subject.fuzzy_match_score, Some(100));
    assert_eq!(subject.curriculum, Some(CurriculumTag::Current));
    assert_eq!(subject.original_name.as_deref(), Some("Matematik 1A"));
    assert_eq!(subject.original_code, None);
    assert_eq!(subject.original_points.as_deref(), Some("50"));
    assert_eq!(result.total_points, 100);
    assert!(result.unmatched.is_empty());
}

#[test]
fn input_document_is_not_mutated() {
    let input = document(vec![SubjectRecord::new("Matematik 1A", "C")]);
    let before = input.clone();
    let _ = normalize(&input, &primary(), None);
    assert_eq!(input, before);
}

#[test]
fn unmatched_subjects_are_kept_and_listed() {
    let input = document(vec![
        SubjectRecord::new("Dans och rörelse", "A")
            .with_code("DANDAN0")
            .with_points("50"),
        SubjectRecord::new("Matematik 1a", "B"),
    ]);
    let result = normalize(&input, &primary(), None);

    assert_eq!(result.unmatched, vec!["Dans och rörelse".to_string()]);
    let kept = &result.document.subjects[0];
    assert_eq!(kept.name, "Dans och rörelse");
    assert_eq!(kept.course_code.as_deref(), Some("DANDAN0"));
    assert_eq!(kept.points.as_deref(), Some("50"));
    assert!(kept.fuzzy_match_score.unwrap() < 80);
    assert_eq!(kept.curriculum, None);
    assert_eq!(result.total_points, 150);
}

#[test]
fn document_tag_follows_last_matched_subject() {
    let mixed = document(vec![
        SubjectRecord::new("Svenska A", "VG"),
        SubjectRecord::new("Matematik 1a", "C"),
        SubjectRecord::new("Okänt ämne", "A"),
    ]);
    let result = normalize(&mixed, &primary(), Some(&secondary()));
    assert_eq!(result.document.curriculum, Some(CurriculumTag::Current));
    assert_eq!(
        result.document.subjects[0].curriculum,
        Some(CurriculumTag::PreLegacy)
    );

    let reversed = document(vec![
        SubjectRecord::new("Matematik 1a", "C"),
        SubjectRecord::new("Svenska A", "VG"),
    ]);
    let result = normalize(&reversed, &primary(), Some(&secondary()));
    assert_eq!(result.document.curriculum, Some(CurriculumTag::PreLegacy));
}

#[test]
fn normalizing_twice_only_updates_snapshots() {
    let input = document(vec![
        SubjectRecord::new("matematik 1A", "C"),
        SubjectRecord::new("Svenska A", "G"),
        SubjectRecord::new("Okänt ämne", "A"),
    ]);
    let catalog = primary();
    let normalizer = SubjectNormalizer::new(&catalog, None);
    let once = normalizer.normalize(&input);
    let twice = normalizer.normalize(&once.document);

    for (first, second) in once.document.subjects.iter().zip(&twice.document.subjects) {
        assert_eq!(first.name, second.name);
        assert_eq!(first.course_code, second.course_code);
        assert_eq!(first.points, second.points);
        assert_eq!(first.grade, second.grade);
        assert_eq!(second.original_name.as_deref(), Some(first.name.as_str()));
        assert_eq!(second.original_code, first.course_code);
        assert_eq!(second.original_points, first.points);
    }
    assert_eq!(once.unmatched, twice.unmatched);
}

#[test]
fn custom_threshold_is_respected() {
    let input = document(vec![SubjectRecord::new("Matematik 1", "C")]);
    let result = SubjectNormalizer::new(&primary(), None)
        .with_matcher(FuzzyMatcher::with_threshold(100))
        .normalize(&input);
    assert_eq!(result.unmatched, vec!["Matematik 1".to_string()]);
}
