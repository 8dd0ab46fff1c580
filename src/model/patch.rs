//! Deserialization for transfer-shape fields.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Use with `#[serde(default, deserialize_with = "non_null")]`: an omitted field
/// stays `None`, a present value becomes `Some`, and an explicit `null` is rejected
/// because no business column accepts one.
pub(crate) fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(v) => Ok(Some(v)),
        None => Err(D::Error::custom("field may not be null")),
    }
}

/// A date-time with or without an offset. Offset-less values are read as UTC.
pub(crate) fn datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(raw.trim()).ok_or_else(|| D::Error::custom(format!("invalid date-time: {:?}", raw)))
}

/// `datetime` for update shapes, with the `non_null` rules.
pub(crate) fn non_null_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(raw.trim())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date-time: {:?}", raw))),
        None => Err(D::Error::custom("field may not be null")),
    }
}

/// Accepts RFC 3339, PostgreSQL's text rendering of timestamptz, and the
/// offset-less ISO 8601 forms (read as UTC).
pub(crate) fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(t.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|t| t.and_utc())
}
