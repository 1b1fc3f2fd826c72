//! Key folding and lenient number parsing shared by every component.

/// Fold a name or code into its lookup key: trimmed and lower-cased.
pub fn fold_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Trimmed, case-insensitive equality.
pub fn same_key(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Parse a string-encoded point value.
///
/// Anything that is not a non-negative integer (blank, negative, decimals,
/// words) counts as zero.
pub fn parse_points(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .map_or(0, i64::from)
}
