use serde::{Deserialize, Serialize};

use crate::requirement::Alternative;

/// A course counted in the merit average, with its accepted substitutes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeritCourseSpec {
    #[serde(default)]
    pub name: String,
    pub code: String,
    #[serde(default, rename = "alternativeCourses")]
    pub alternatives: Vec<Alternative>,
}

impl MeritCourseSpec {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            alternatives: Vec::new(),
        }
    }

    /// The course code followed by every alternative code.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.code.as_str())
            .chain(self.alternatives.iter().map(|alt| alt.code.as_str()))
    }
}
