//! Program requirement evaluation.
//!
//! A required course is satisfied by any member of its equivalence class:
//! the course itself, its alternatives, and every course of the same
//! subject group at an equal or higher level together with their
//! alternatives.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use transcript_model::{
    Course, RequirementResult, RequirementSpec, StudentDocument, SubjectGroup, SubjectRecord,
    requirement_value, same_key,
};

/// Per-course results plus their conjunction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequirementReport {
    pub results: BTreeMap<String, RequirementResult>,
    pub meets_all_requirements: bool,
}

impl RequirementReport {
    pub fn unmet(&self) -> impl Iterator<Item = &RequirementResult> {
        self.results.values().filter(|result| !result.is_met)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberKind {
    /// The required course itself.
    Required,
    /// Another course of the group at an equal or higher level.
    Course,
    Alternative,
}

#[derive(Debug, Clone, Copy)]
struct ClassMember<'a> {
    name: &'a str,
    code: &'a str,
    level: i32,
    kind: MemberKind,
}

impl ClassMember<'_> {
    fn matches(&self, subject: &SubjectRecord) -> bool {
        if !self.name.trim().is_empty() && same_key(&subject.name, self.name) {
            return true;
        }
        let code = subject.code();
        !code.trim().is_empty() && !self.code.trim().is_empty() && same_key(code, self.code)
    }
}

struct Candidate<'a> {
    subject: &'a SubjectRecord,
    member: ClassMember<'a>,
    value: u8,
}

/// Evaluate every course of the spec against the document.
///
/// Results are keyed by the declared course name.
pub fn evaluate(
    document: &StudentDocument,
    spec: &RequirementSpec,
) -> BTreeMap<String, RequirementResult> {
    let mut results = BTreeMap::new();
    for group in &spec.subjects {
        for (index, course) in group.courses.iter().enumerate() {
            let class = equivalence_class(group, index);
            let result = evaluate_course(document, course, &class);
            debug!(
                course = %course.name,
                required = %course.required_grade,
                grade = result.student_grade.as_deref().unwrap_or("-"),
                met = result.is_met,
                "Evaluated requirement"
            );
            results.insert(course.name.clone(), result);
        }
    }
    results
}

/// [`evaluate`] plus the document-level conjunction.
pub fn evaluate_report(document: &StudentDocument, spec: &RequirementSpec) -> RequirementReport {
    let results = evaluate(document, spec);
    let meets_all_requirements = meets_all_requirements(&results);
    RequirementReport {
        results,
        meets_all_requirements,
    }
}

/// Whether every result is met. True for an empty result set.
pub fn meets_all_requirements(results: &BTreeMap<String, RequirementResult>) -> bool {
    results.values().all(|result| result.is_met)
}

fn equivalence_class(group: &SubjectGroup, index: usize) -> Vec<ClassMember<'_>> {
    let course = &group.courses[index];
    let mut class = vec![ClassMember {
        name: &course.name,
        code: &course.code,
        level: course.level,
        kind: MemberKind::Required,
    }];
    push_alternatives(&mut class, course);

    for (other_index, other) in group.courses.iter().enumerate() {
        if other_index == index || other.level < course.level {
            continue;
        }
        class.push(ClassMember {
            name: &other.name,
            code: &other.code,
            level: other.level,
            kind: MemberKind::Course,
        });
        push_alternatives(&mut class, other);
    }
    class
}

fn push_alternatives<'a>(class: &mut Vec<ClassMember<'a>>, course: &'a Course) {
    class.extend(course.alternatives.iter().map(|alt| ClassMember {
        name: &alt.name,
        code: &alt.code,
        level: course.level,
        kind: MemberKind::Alternative,
    }));
}

fn evaluate_course(
    document: &StudentDocument,
    course: &Course,
    class: &[ClassMember<'_>],
) -> RequirementResult {
    let mut best: Option<Candidate<'_>> = None;
    let mut original: Option<&SubjectRecord> = None;
    let mut other_grades = Vec::new();

    for subject in &document.subjects {
        let Some(member) = class.iter().find(|member| member.matches(subject)).copied() else {
            continue;
        };
        let value = requirement_value(&subject.grade);

        if member.kind == MemberKind::Required {
            if original.is_none_or(|kept| value > requirement_value(&kept.grade)) {
                original = Some(subject);
            }
        } else if member.level <= course.level {
            other_grades.push(format!("{}: {}", subject.name, subject.grade));
        }

        let replace = match &best {
            None => true,
            Some(current) => {
                value > current.value
                    || (value == current.value
                        && member.kind == MemberKind::Required
                        && current.member.kind != MemberKind::Required)
            }
        };
        if replace {
            best = Some(Candidate {
                subject,
                member,
                value,
            });
        }
    }

    let required_value = requirement_value(&course.required_grade);
    let mut result = RequirementResult {
        course_name: course.name.clone(),
        required_grade: course.required_grade.clone(),
        original_course_grade: original.map(|subject| subject.grade.clone()),
        other_grades_in_alternatives: other_grades,
        ..RequirementResult::default()
    };

    if let Some(best) = best {
        let via_other = best.member.kind != MemberKind::Required;
        result.is_met = best.value >= required_value;
        result.matched_course = Some(best.subject.name.clone());
        result.student_grade = Some(best.subject.grade.clone());
        result.alternative_course_grade = via_other.then(|| best.subject.grade.clone());
        result.met_by_alternative_course = result.is_met && via_other;
        result.met_by_higher_level_course = result.is_met && best.member.level > course.level;
    }
    result
}
