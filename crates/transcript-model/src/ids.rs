#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Personal identifier of a student, trimmed and guaranteed non-empty.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PersonalId(String);

impl PersonalId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidPersonalId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let id = PersonalId::new("  199001011234 ").unwrap();
        assert_eq!(id.as_str(), "199001011234");
    }

    #[test]
    fn rejects_blank_identifier() {
        assert!(matches!(
            PersonalId::new("   "),
            Err(ModelError::InvalidPersonalId(_))
        ));
    }
}
