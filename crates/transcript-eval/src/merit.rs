//! Points-weighted merit averages.

use serde::Serialize;
use tracing::{debug, info};
use transcript_model::{
    Catalog, MeritCourseSpec, RequirementSpec, StudentDocument, SubjectRecord, merit_value,
    same_key,
};

/// Where a course's contribution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionSource {
    /// A subject on the document.
    Document,
    /// Not on the document; counted at the catalog's nominal points with grade 0.
    CatalogFallback,
    /// Found nowhere; contributes neither weight nor points.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeritCourseResult {
    pub course_name: String,
    pub course_code: String,
    pub matched_subject: Option<String>,
    pub grade: Option<String>,
    pub merit_value: f64,
    pub points: i64,
    pub weighted: f64,
    pub source: ContributionSource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeritSummary {
    /// Rounded to two decimals; 0 when no points were counted.
    pub average: f64,
    pub total_weighted_grade_points: f64,
    pub total_course_points: i64,
    pub courses: Vec<MeritCourseResult>,
}

/// Merit average of the document over the given courses.
pub fn compute_average(
    document: &StudentDocument,
    merit_courses: &[MeritCourseSpec],
    fallback: &Catalog,
) -> f64 {
    compute_merit(document, merit_courses, fallback).average
}

/// [`compute_average`] with the per-course breakdown.
///
/// Each course matches the first subject, in document order, whose code is
/// the course code or one of its alternative codes. Without a match the
/// fallback catalog is consulted for the same codes in the same order.
pub fn compute_merit(
    document: &StudentDocument,
    merit_courses: &[MeritCourseSpec],
    fallback: &Catalog,
) -> MeritSummary {
    let mut summary = MeritSummary::default();

    for course in merit_courses {
        let result = contribution(document, course, fallback);
        debug!(
            course = %course.code,
            source = ?result.source,
            points = result.points,
            weighted = result.weighted,
            "Merit contribution"
        );
        summary.total_weighted_grade_points += result.weighted;
        summary.total_course_points += result.points;
        summary.courses.push(result);
    }

    summary.average = average(summary.total_weighted_grade_points, summary.total_course_points);
    info!(
        courses = merit_courses.len(),
        points = summary.total_course_points,
        average = summary.average,
        "Computed merit average"
    );
    summary
}

/// Merit courses implied by the legacy `includeInAverage` flag.
pub fn merit_courses_from_requirements(spec: &RequirementSpec) -> Vec<MeritCourseSpec> {
    spec.courses()
        .filter(|course| course.include_in_average)
        .map(|course| MeritCourseSpec {
            name: course.name.clone(),
            code: course.code.clone(),
            alternatives: course.alternatives.clone(),
        })
        .collect()
}

fn contribution(
    document: &StudentDocument,
    course: &MeritCourseSpec,
    fallback: &Catalog,
) -> MeritCourseResult {
    let mut result = MeritCourseResult {
        course_name: course.name.clone(),
        course_code: course.code.clone(),
        matched_subject: None,
        grade: None,
        merit_value: 0.0,
        points: 0,
        weighted: 0.0,
        source: ContributionSource::Skipped,
    };

    if let Some(subject) = find_subject(document, course) {
        let value = merit_value(&subject.grade);
        let points = subject.parsed_points();
        result.matched_subject = Some(subject.name.clone());
        result.grade = Some(subject.grade.clone());
        result.merit_value = value;
        result.points = points;
        result.weighted = points as f64 * value;
        result.source = ContributionSource::Document;
    } else if let Some(entry) = course.codes().find_map(|code| fallback.find_by_code(code)) {
        result.points = entry.points.map_or(0, i64::from);
        result.source = ContributionSource::CatalogFallback;
    }
    result
}

fn find_subject<'a>(
    document: &'a StudentDocument,
    course: &MeritCourseSpec,
) -> Option<&'a SubjectRecord> {
    document.subjects.iter().find(|subject| {
        let code = subject.code();
        !code.trim().is_empty() && course.codes().any(|wanted| same_key(code, wanted))
    })
}

fn average(weighted: f64, points: i64) -> f64 {
    if points == 0 {
        return 0.0;
    }
    round2(weighted / points as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
