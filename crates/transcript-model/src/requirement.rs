//! Program requirement specifications and per-course results.

use serde::{Deserialize, Serialize};

/// An explicitly equivalent course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

impl Alternative {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// A required course inside a [`SubjectGroup`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
    pub required_grade: String,
    /// Legacy averaging flag; see `transcript_eval::merit_courses_from_requirements`.
    #[serde(default)]
    pub include_in_average: bool,
}

/// Courses of one subject, ordered by level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSpec {
    #[serde(default)]
    pub subjects: Vec<SubjectGroup>,
}

impl RequirementSpec {
    /// Every course across all groups, in declaration order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.subjects.iter().flat_map(|group| group.courses.iter())
    }
}

/// Outcome of checking one required course against a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementResult {
    /// Declared course name.
    pub course_name: String,
    /// Course (as named on the document) that produced the best grade.
    pub matched_course: Option<String>,
    pub required_grade: String,
    pub is_met: bool,
    /// Best grade found across the equivalence class.
    pub student_grade: Option<String>,
    /// Grade of the exact required course, when present on the document.
    pub original_course_grade: Option<String>,
    /// Grade of the satisfying course when it is not the required course itself.
    pub alternative_course_grade: Option<String>,
    pub met_by_alternative_course: bool,
    pub met_by_higher_level_course: bool,
    /// Other same-level equivalents found on the document, as `"name: grade"`.
    pub other_grades_in_alternatives: Vec<String>,
}
