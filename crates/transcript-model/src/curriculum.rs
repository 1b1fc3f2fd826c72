//! Curriculum era markers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which catalog produced a subject's canonical match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurriculumTag {
    /// Matched against the primary catalog.
    #[serde(rename = "current-era")]
    Current,
    /// Matched against the secondary (legacy) catalog.
    #[serde(rename = "pre-legacy-era")]
    PreLegacy,
}

impl CurriculumTag {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current-era",
            Self::PreLegacy => "pre-legacy-era",
        }
    }
}

impl fmt::Display for CurriculumTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
