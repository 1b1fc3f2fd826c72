#![deny(unsafe_code)]

pub mod catalog;
pub mod curriculum;
pub mod document;
pub mod error;
pub mod grade;
pub mod ids;
pub mod merit;
pub mod requirement;
pub mod text;

pub use catalog::{Catalog, CatalogEntry, CatalogSource};
pub use curriculum::CurriculumTag;
pub use document::{StudentDocument, SubjectRecord};
pub use error::{ModelError, Result};
pub use grade::{GradeScale, merit_value, requirement_value};
pub use ids::PersonalId;
pub use merit::MeritCourseSpec;
pub use requirement::{Alternative, Course, RequirementResult, RequirementSpec, SubjectGroup};
pub use text::{fold_key, parse_points, same_key};
