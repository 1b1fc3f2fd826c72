//! Requirement and merit spec loading.
//!
//! Specs are read from disk on every call so edits take effect immediately.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;
use transcript_model::{MeritCourseSpec, RequirementSpec};

use crate::error::SpecError;

/// Load `{subjects: [{name, courses: [...]}]}` from a JSON file.
pub fn load_requirement_spec(path: &Path) -> Result<RequirementSpec, SpecError> {
    let spec: RequirementSpec = load_json(path)?;
    debug!(
        path = %path.display(),
        courses = spec.courses().count(),
        "Loaded requirement spec"
    );
    Ok(spec)
}

pub fn parse_requirement_spec(content: &str, origin: &Path) -> Result<RequirementSpec, SpecError> {
    parse_json(content, origin)
}

/// Load `[{name, code, alternativeCourses: [...]}]` from a JSON file.
pub fn load_merit_courses(path: &Path) -> Result<Vec<MeritCourseSpec>, SpecError> {
    let courses: Vec<MeritCourseSpec> = load_json(path)?;
    debug!(path = %path.display(), courses = courses.len(), "Loaded merit courses");
    Ok(courses)
}

pub fn parse_merit_courses(
    content: &str,
    origin: &Path,
) -> Result<Vec<MeritCourseSpec>, SpecError> {
    parse_json(content, origin)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, SpecError> {
    let content = fs::read_to_string(path).map_err(|source| SpecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&content, path)
}

fn parse_json<T: DeserializeOwned>(content: &str, origin: &Path) -> Result<T, SpecError> {
    serde_json::from_str(content).map_err(|source| SpecError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}
