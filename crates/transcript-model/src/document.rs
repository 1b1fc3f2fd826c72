//! Extracted academic documents and their subject lines.

use serde::{Deserialize, Deserializer, Serialize};

use crate::curriculum::CurriculumTag;
use crate::error::Result;
use crate::ids::PersonalId;
use crate::text::parse_points;

/// One "subject / grade" line of an extracted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    #[serde(rename = "subject_name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    #[serde(default)]
    pub grade: String,
    /// String-encoded point value as extracted.
    #[serde(default, deserialize_with = "deserialize_points")]
    pub points: Option<String>,
    /// Best similarity observed during normalization (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_match_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum: Option<CurriculumTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_points: Option<String>,
}

impl SubjectRecord {
    pub fn new(name: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.course_code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: impl Into<String>) -> Self {
        self.points = Some(points.into());
        self
    }

    /// Course code, or an empty string when none was extracted.
    pub fn code(&self) -> &str {
        self.course_code.as_deref().unwrap_or("")
    }

    /// Parsed points; unparsable values count as zero.
    pub fn parsed_points(&self) -> i64 {
        parse_points(self.points.as_deref())
    }
}

/// A single extracted document (or a merge of several) for one person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentDocument {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub personal_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub school_form: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum: Option<CurriculumTag>,
    #[serde(default)]
    pub subjects: Vec<SubjectRecord>,
}

impl StudentDocument {
    /// Sum of parsed subject points.
    pub fn total_points(&self) -> i64 {
        self.subjects.iter().map(SubjectRecord::parsed_points).sum()
    }

    /// Validated personal identifier.
    pub fn person(&self) -> Result<PersonalId> {
        PersonalId::new(self.personal_id.as_str())
    }

    /// Copy of the identity fields with no subjects.
    pub fn identity(&self) -> Self {
        Self {
            full_name: self.full_name.clone(),
            personal_id: self.personal_id.clone(),
            title: self.title.clone(),
            school_form: self.school_form.clone(),
            curriculum: self.curriculum,
            subjects: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoints {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Extraction output is not consistent about quoting numbers.
fn deserialize_points<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPoints>::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        RawPoints::Text(text) => text,
        RawPoints::Integer(number) => number.to_string(),
        RawPoints::Float(number) => number.to_string(),
    }))
}
