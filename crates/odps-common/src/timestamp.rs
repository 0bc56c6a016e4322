//! RFC 1123 (`Mon, 06 Jan 2025 08:30:00 GMT`) dates as carried in the REST payloads.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const GMT_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

pub fn format_gmt(ts: &DateTime<Utc>) -> String {
    ts.format(GMT_FORMAT).to_string()
}

pub fn parse_gmt(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, GMT_FORMAT) {
        return Some(naive.and_utc());
    }
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// serde adapter for `Option<DateTime<Utc>>` fields; blank text reads as `None`.
pub mod gmt_option {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&format_gmt(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse_gmt(text)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid GMT date: {text}"))),
        }
    }
}
