//! Entry dates: parsing frontmatter values and display formats

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parse a frontmatter date into a timezone-naive instant.
///
/// Accepts `YYYY-MM-DD` (midnight), `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD HH:MM:SS` and RFC 3339. Offsets are normalized to UTC and dropped.
pub fn parse_entry_date(input: &str) -> Option<NaiveDateTime> {
    let s = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Serde adapter for frontmatter date fields.
pub fn deserialize_entry_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_entry_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid date '{}', expected YYYY-MM-DD or RFC 3339",
            raw
        ))
    })
}

/// "Jan 5, 2024"
pub fn default_date_format(date: NaiveDateTime) -> String {
    date.format("%b %-d, %Y").to_string()
}
