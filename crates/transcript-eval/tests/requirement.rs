//! Requirement evaluation with level and alternative equivalence.

use transcript_eval::{evaluate, evaluate_report, meets_all_requirements};
use transcript_model::{
    Alternative, Course, RequirementSpec, StudentDocument, SubjectGroup, SubjectRecord,
};

fn course(name: &str, code: &str, level: i32, required_grade: &str) -> Course {
    Course {
        name: name.into(),
        code: code.into(),
        level,
        required_grade: required_grade.into(),
        ..Course::default()
    }
}

fn spec(groups: Vec<(&str, Vec<Course>)>) -> RequirementSpec {
    RequirementSpec {
        subjects: groups
            .into_iter()
            .map(|(name, courses)| SubjectGroup {
                name: name.into(),
                courses,
            })
            .collect(),
    }
}

fn student(subjects: Vec<SubjectRecord>) -> StudentDocument {
    StudentDocument {
        personal_id: "199001011234".into(),
        subjects,
        ..StudentDocument::default()
    }
}

fn mathematics() -> RequirementSpec {
    spec(vec![(
        "Matematik",
        vec![
            course("Matematik 1a", "MATMAT01a", 1, "E"),
            course("Matematik 2a", "MATMAT02a", 2, "E"),
            course("Matematik 3b", "MATMAT03b", 3, "C"),
        ],
    )])
}

#[test]
fn exact_course_meets_requirement() {
    let document = student(vec![SubjectRecord::new("Matematik 1a", "C")]);
    let results = evaluate(
        &document,
        &spec(vec![(
            "Matematik",
            vec![course("Matematik 1a", "MATMAT01a", 1, "E")],
        )]),
    );

    let result = &results["Matematik 1a"];
    assert!(result.is_met);
    assert_eq!(result.student_grade.as_deref(), Some("C"));
    assert_eq!(result.original_course_grade.as_deref(), Some("C"));
    assert!(!result.met_by_alternative_course);
    assert!(!result.met_by_higher_level_course);
}

#[test]
fn higher_level_course_satisfies_lower_requirement() {
    let document = student(vec![
        SubjectRecord::new("Matematik 2a", "D").with_code("MATMAT02a"),
    ]);
    let results = evaluate(&document, &mathematics());

    let lower = &results["Matematik 1a"];
    assert!(lower.is_met);
    assert_eq!(lower.matched_course.as_deref(), Some("Matematik 2a"));
    assert_eq!(lower.original_course_grade, None);
    assert_eq!(lower.alternative_course_grade.as_deref(), Some("D"));
    assert!(lower.met_by_higher_level_course);

    assert!(results["Matematik 2a"].is_met);
    assert!(!results["Matematik 3b"].is_met);
}

#[test]
fn lower_level_course_does_not_satisfy_higher_requirement() {
    let document = student(vec![SubjectRecord::new("Matematik 1a", "A")]);
    let results = evaluate(&document, &mathematics());
    assert!(results["Matematik 1a"].is_met);
    assert!(!results["Matematik 2a"].is_met);
    assert_eq!(results["Matematik 2a"].student_grade, None);
}

#[test]
fn best_grade_across_class_decides() {
    let document = student(vec![
        SubjectRecord::new("Matematik 1a", "F"),
        SubjectRecord::new("Matematik 3b", "B"),
    ]);
    let results = evaluate(&document, &mathematics());

    let lower = &results["Matematik 1a"];
    assert!(lower.is_met);
    assert_eq!(lower.student_grade.as_deref(), Some("B"));
    assert_eq!(lower.original_course_grade.as_deref(), Some("F"));
}

#[test]
fn alternative_matches_by_code() {
    let mut english = course("Engelska 5", "ENGENG05", 1, "E");
    english.alternatives = vec![Alternative::new("Engelska A", "EN1201")];
    let requirements = spec(vec![("Engelska", vec![english])]);

    let document = student(vec![
        SubjectRecord::new("Engelska  A (1994)", "VG").with_code("en1201"),
    ]);
    let results = evaluate(&document, &requirements);

    let result = &results["Engelska 5"];
    assert!(result.is_met);
    assert!(result.met_by_alternative_course);
    assert!(!result.met_by_higher_level_course);
    assert_eq!(result.other_grades_in_alternatives, ["Engelska  A (1994): VG"]);
}

#[test]
fn code_only_alternative_does_not_match_blank_subject_names() {
    let mut english = course("Engelska 5", "ENGENG05", 1, "C");
    english.alternatives = vec![Alternative::new("", "EN1201")];
    let requirements = spec(vec![("Engelska", vec![english])]);

    let document = student(vec![SubjectRecord::new("  ", "A")]);
    let result = &evaluate(&document, &requirements)["Engelska 5"];
    assert!(!result.is_met);
    assert_eq!(result.student_grade, None);

    let document = student(vec![SubjectRecord::new("Engelska A", "A").with_code("EN1201")]);
    assert!(evaluate(&document, &requirements)["Engelska 5"].is_met);
}

#[test]
fn exact_course_wins_ties_with_alternatives() {
    let mut english = course("Engelska 5", "ENGENG05", 1, "E");
    english.alternatives = vec![Alternative::new("Engelska A", "EN1201")];
    let requirements = spec(vec![("Engelska", vec![english])]);

    let document = student(vec![
        SubjectRecord::new("Engelska A", "C"),
        SubjectRecord::new("Engelska 5", "C"),
    ]);
    let result = &evaluate(&document, &requirements)["Engelska 5"];
    assert!(result.is_met);
    assert_eq!(result.matched_course.as_deref(), Some("Engelska 5"));
    assert!(!result.met_by_alternative_course);
    assert_eq!(result.alternative_course_grade, None);
}

#[test]
fn insufficient_grade_is_not_met() {
    let document = student(vec![SubjectRecord::new("Matematik 3b", "E")]);
    let result = &evaluate(&document, &mathematics())["Matematik 3b"];
    assert!(!result.is_met);
    assert_eq!(result.student_grade.as_deref(), Some("E"));
    assert!(!result.met_by_higher_level_course);
}

#[test]
fn missing_course_is_not_met() {
    let results = evaluate(&student(Vec::new()), &mathematics());
    assert_eq!(results.len(), 3);
    assert!(results.values().all(|result| !result.is_met));
    assert!(!meets_all_requirements(&results));
}

#[test]
fn unknown_grade_token_values_zero() {
    let document = student(vec![SubjectRecord::new("Matematik 1a", "Godkänd")]);
    let requirements = spec(vec![(
        "Matematik",
        vec![course("Matematik 1a", "", 1, "F")],
    )]);
    // Zero meets a zero requirement.
    assert!(evaluate(&document, &requirements)["Matematik 1a"].is_met);
}

#[test]
fn report_combines_results() {
    let document = student(vec![
        SubjectRecord::new("Matematik 3b", "A"),
        SubjectRecord::new("Svenska 1", "E"),
    ]);
    let mut requirements = mathematics();
    requirements.subjects.push(SubjectGroup {
        name: "Svenska".into(),
        courses: vec![course("Svenska 1", "SVESVE01", 1, "E")],
    });

    let report = evaluate_report(&document, &requirements);
    assert!(report.meets_all_requirements);
    assert_eq!(report.unmet().count(), 0);

    requirements.subjects[1].courses[0].required_grade = "C".into();
    let report = evaluate_report(&document, &requirements);
    assert!(!report.meets_all_requirements);
    let unmet: Vec<_> = report.unmet().map(|r| r.course_name.as_str()).collect();
    assert_eq!(unmet, ["Svenska 1"]);
}
