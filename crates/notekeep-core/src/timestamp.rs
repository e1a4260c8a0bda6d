//! ISO-8601 timestamp helpers shared by entities and repositories.

use chrono::{DateTime, SecondsFormat, Utc};

/// Returns the current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a stored timestamp. Returns `None` for anything that is not RFC 3339.
pub fn parse_iso(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
