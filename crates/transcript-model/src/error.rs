use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    #[error("invalid personal identifier: {0:?}")]
    InvalidPersonalId(String),
    #[error("catalog entry has an empty course name (code {code:?})")]
    EmptyCourseName { code: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
