//! Evaluation over normalized academic records.
//!
//! - [`merge`]: fold several documents of one person into one record
//! - [`evaluate`]: check program requirements using level/alternative equivalence
//! - [`compute_merit`]: points-weighted merit average with catalog fallback
//! - [`spec`]: requirement and merit spec loaders (read fresh on every call)
//! - [`certificate`]: exam certificate recognition

#![deny(unsafe_code)]

pub mod certificate;
pub mod error;
pub mod merge;
pub mod merit;
pub mod requirement;
pub mod spec;

pub use certificate::is_exam_certificate;
pub use error::{MergeError, SpecError};
pub use merge::{merge, merge_checked, validate_same_person};
pub use merit::{
    ContributionSource, MeritCourseResult, MeritSummary, compute_average, compute_merit,
    merit_courses_from_requirements,
};
pub use requirement::{RequirementReport, evaluate, evaluate_report, meets_all_requirements};
pub use spec::{
    load_merit_courses, load_requirement_spec, parse_merit_courses, parse_requirement_spec,
};
