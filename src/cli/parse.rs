//! Value parsers for clap arguments

use arbor_core::coordinate::Coordinate;
use arbor_core::note::ReviewType;
use chrono::{DateTime, Utc};

/// Parse review type from string
pub fn parse_review_type(s: &str) -> std::result::Result<ReviewType, String> {
    s.parse::<ReviewType>().map_err(|e| e.to_string())
}

/// Parse a dotted section coordinate such as `1.2.3`
pub fn parse_coordinate(s: &str) -> std::result::Result<Coordinate, String> {
    s.parse::<Coordinate>().map_err(|e| e.to_string())
}

/// Parse an RFC 3339 timestamp, normalized to UTC
pub fn parse_timestamp(s: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid timestamp '{}': {}", s, e))
}
