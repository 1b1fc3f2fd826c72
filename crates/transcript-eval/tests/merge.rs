//! Merging documents of one person.

use transcript_eval::{MergeError, merge, merge_checked, validate_same_person};
use transcript_model::{StudentDocument, SubjectRecord};

fn document(id: &str, subjects: Vec<SubjectRecord>) -> StudentDocument {
    StudentDocument {
        full_name: "Anna Andersson".into(),
        personal_id: id.into(),
        title: "Examensbevis".into(),
        school_form: "Gymnasieskola".into(),
        subjects,
        ..StudentDocument::default()
    }
}

#[test]
fn keeps_higher_grade_across_documents() {
    let documents = [
        document("199001011234", vec![SubjectRecord::new("Matematik 1a", "C")]),
        document("199001011234", vec![SubjectRecord::new("Matematik 1a", "E")]),
    ];

    let merged = merge_checked(&documents).expect("same person");
    assert_eq!(merged.subjects.len(), 1);
    assert_eq!(merged.subjects[0].grade, "C");
}

#[test]
fn higher_grade_in_later_document_replaces_in_place() {
    let documents = [
        document(
            "199001011234",
            vec![
                SubjectRecord::new("Svenska 1", "B"),
                SubjectRecord::new("Matematik 1a", "E"),
                SubjectRecord::new("Engelska 5", "C"),
            ],
        ),
        document(
            "199001011234",
            vec![
                SubjectRecord::new("Historia 1a1", "A"),
                SubjectRecord::new("MATEMATIK 1A", "A").with_points("100"),
            ],
        ),
    ];

    let merged = merge(&documents);
    let names: Vec<_> = merged.subjects.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        ["Svenska 1", "MATEMATIK 1A", "Engelska 5", "Historia 1a1"]
    );
    assert_eq!(merged.subjects[1].grade, "A");
    assert_eq!(merged.total_points(), 100);
}

#[test]
fn equal_grades_keep_first_seen_record() {
    let documents = [
        document(
            "199001011234",
            vec![SubjectRecord::new("Matematik 1a", "VG").with_points("100")],
        ),
        document(
            "199001011234",
            vec![SubjectRecord::new("matematik 1a", "C").with_points("50")],
        ),
    ];

    let merged = merge(&documents);
    assert_eq!(merged.subjects.len(), 1);
    assert_eq!(merged.subjects[0].grade, "VG");
    assert_eq!(merged.subjects[0].points.as_deref(), Some("100"));
}

#[test]
fn identity_comes_from_first_document() {
    let mut second = document("199001011234", Vec::new());
    second.full_name = "A. Andersson".into();
    second.title = "Slutbetyg".into();

    let merged = merge(&[document("199001011234", Vec::new()), second]);
    assert_eq!(merged.full_name, "Anna Andersson");
    assert_eq!(merged.title, "Examensbevis");
}

#[test]
fn mismatched_identifiers_are_rejected_before_merge() {
    let documents = [
        document("199001011234", Vec::new()),
        document("198512319876", Vec::new()),
    ];

    let err = merge_checked(&documents).unwrap_err();
    match err {
        MergeError::PersonalIdMismatch { expected, found } => {
            assert_eq!(expected, "199001011234");
            assert_eq!(found, "198512319876");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn identifiers_are_compared_trimmed() {
    let documents = [
        document("199001011234", Vec::new()),
        document(" 199001011234 ", Vec::new()),
    ];
    let id = validate_same_person(&documents).expect("same person");
    assert_eq!(id.as_str(), "199001011234");
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(
        validate_same_person(&[]),
        Err(MergeError::NoDocuments)
    ));
    assert!(merge(&[]).subjects.is_empty());
}

#[test]
fn blank_identifier_is_rejected() {
    let documents = [document("  ", Vec::new())];
    assert!(matches!(
        validate_same_person(&documents),
        Err(MergeError::Model(_))
    ));
}
