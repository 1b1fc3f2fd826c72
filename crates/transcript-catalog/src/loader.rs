//! Catalog file and payload parsing.
//!
//! Three shapes are supported:
//!
//! - Primary file: `{"<course name>": {"code": "...", "points": 100}, ...}`
//! - Secondary file: `[{"code": "...", "name": "...", "points": 100}, ...]`
//! - Remote payload: `{"courses": [{"courseCode": "...", "courseName": "...", "coursePoints": "100"}]}`
//!
//! File point values may be a number, a numeric string, an empty string or
//! null. Remote point values that do not parse are left unset.

use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};
use transcript_model::{Catalog, CatalogEntry, CatalogSource};

use crate::error::{CatalogError, Result};

#[derive(Debug, Deserialize)]
struct PrimaryRecord {
    #[serde(default)]
    code: String,
    #[serde(default, deserialize_with = "lenient_points")]
    points: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SecondaryRecord {
    #[serde(default)]
    code: String,
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "lenient_points")]
    points: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RemotePayload {
    courses: Vec<RemoteCourse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteCourse {
    #[serde(default)]
    course_code: String,
    #[serde(default)]
    course_name: String,
    #[serde(default)]
    course_points: Option<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoints {
    Number(u32),
    Text(String),
}

fn lenient_points<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawPoints>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawPoints::Number(points)) => Ok(Some(points)),
        Some(RawPoints::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<u32>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("unable to convert {text:?} to points")))
        }
    }
}

/// Load the primary catalog from a JSON file.
///
/// A missing or malformed file is a fatal configuration error.
pub fn load_primary_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::io(path, source))?;
    parse_primary_catalog(&content, path)
}

/// Parse primary catalog content; `origin` is used in error messages.
pub fn parse_primary_catalog(content: &str, origin: &Path) -> Result<Catalog> {
    let parse_error = |source| CatalogError::Parse {
        path: origin.to_path_buf(),
        source,
    };
    // Object order is kept so equal-score matches resolve to the earlier course.
    let records: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(content).map_err(parse_error)?;

    let mut catalog = Catalog::new();
    for (name, value) in records {
        let record: PrimaryRecord = serde_json::from_value(value).map_err(parse_error)?;
        let entry = CatalogEntry::new(
            name.trim(),
            record.code.trim(),
            record.points,
            CatalogSource::Primary,
        );
        let inserted = catalog
            .insert(entry)
            .map_err(|source| CatalogError::InvalidEntry {
                path: origin.to_path_buf(),
                source,
            })?;
        if !inserted {
            debug!(course = %name, "Duplicate primary course name ignored");
        }
    }

    debug!(
        path = %origin.display(),
        courses = catalog.len(),
        "Loaded primary catalog"
    );
    Ok(catalog)
}

/// Load the secondary catalog from a JSON file.
pub fn load_secondary_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::io(path, source))?;
    parse_secondary_catalog(&content, path)
}

/// Parse secondary catalog content. The first record per name wins.
pub fn parse_secondary_catalog(content: &str, origin: &Path) -> Result<Catalog> {
    let records: Vec<SecondaryRecord> =
        serde_json::from_str(content).map_err(|source| CatalogError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

    let catalog = collect_secondary(
        records
            .into_iter()
            .map(|record| (record.name, record.code, record.points)),
        &origin.display().to_string(),
    );
    debug!(
        path = %origin.display(),
        courses = catalog.len(),
        "Loaded secondary catalog"
    );
    Ok(catalog)
}

/// Parse a remote secondary catalog response body.
pub fn parse_remote_catalog(body: &str, url: &str) -> Result<Catalog> {
    let payload: RemotePayload =
        serde_json::from_str(body).map_err(|e| CatalogError::RemotePayload {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    let catalog = collect_secondary(
        payload.courses.into_iter().map(|course| {
            let points = course.course_points.as_ref().and_then(remote_points);
            (course.course_name, course.course_code, points)
        }),
        url,
    );
    debug!(url, courses = catalog.len(), "Parsed remote catalog");
    Ok(catalog)
}

fn remote_points(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::String(text) => text.trim().parse().ok(),
        serde_json::Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        _ => None,
    }
}

fn collect_secondary(
    records: impl Iterator<Item = (String, String, Option<u32>)>,
    origin: &str,
) -> Catalog {
    let mut catalog = Catalog::new();
    for (name, code, points) in records {
        let entry = CatalogEntry::new(name.trim(), code.trim(), points, CatalogSource::Secondary);
        if let Err(error) = catalog.insert(entry) {
            warn!(origin, %error, "Skipping secondary catalog record");
        }
    }
    catalog
}
