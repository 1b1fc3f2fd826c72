//! Grade scales.
//!
//! Two fixed scales share one token set: the letter grades A-F, the legacy
//! MVG/VG/G/IG grades, and the numeric grades 0-5.
//!
//! - [`GradeScale::Requirement`] values grades 0-5 and drives requirement
//!   checks and merge tie-breaking.
//! - [`GradeScale::Merit`] values grades 0-20 and drives merit averages.
//!
//! Tokens are matched trimmed and case-insensitively. Unknown tokens value
//! at 0 under either scale.

/// `(token, requirement value, merit value)`
const GRADE_TABLE: &[(&str, u8, f64)] = &[
    ("A", 5, 20.0),
    ("B", 4, 17.5),
    ("C", 3, 15.0),
    ("D", 2, 12.5),
    ("E", 1, 10.0),
    ("F", 0, 0.0),
    ("MVG", 5, 20.0),
    ("VG", 3, 15.0),
    ("G", 1, 10.0),
    ("IG", 0, 0.0),
    ("5", 5, 20.0),
    ("4", 4, 17.5),
    ("3", 3, 15.0),
    ("2", 2, 12.5),
    ("1", 1, 10.0),
    ("0", 0, 0.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeScale {
    /// 0-5 integer scale for requirement checks.
    Requirement,
    /// 0-20 merit point scale for averages.
    Merit,
}

impl GradeScale {
    /// Numeric value of a grade token under this scale.
    pub fn value(&self, grade: &str) -> f64 {
        let Some((_, requirement, merit)) = lookup(grade) else {
            return 0.0;
        };
        match self {
            Self::Requirement => f64::from(requirement),
            Self::Merit => merit,
        }
    }

    /// Whether the token is part of the known grade set.
    pub fn is_known(grade: &str) -> bool {
        lookup(grade).is_some()
    }
}

/// Requirement-scale value (0-5) of a grade token.
pub fn requirement_value(grade: &str) -> u8 {
    lookup(grade).map_or(0, |(_, value, _)| value)
}

/// Merit-scale value (0-20) of a grade token.
pub fn merit_value(grade: &str) -> f64 {
    GradeScale::Merit.value(grade)
}

fn lookup(grade: &str) -> Option<(&'static str, u8, f64)> {
    let token = grade.trim();
    GRADE_TABLE
        .iter()
        .find(|(known, _, _)| known.eq_ignore_ascii_case(token))
        .copied()
}
