//! Blog API types.

mod auth;
mod category;
mod post;

pub use auth::{AccessToken, Identity, LoginRequest};
pub use category::{Category, CategoryDraft};
pub use post::{Post, PostDraft, PostPatch};

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Deserialize a string field, treating `""` and `null` as absent.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Deserialize a timestamp written either without an offset
/// (`2024-01-05T10:20:30.123456`) or as RFC 3339. Offsets are normalized to UTC.
fn timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_timestamp(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    raw.parse::<NaiveDateTime>()
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.naive_utc()))
        .map_err(|e| format!("invalid timestamp {raw:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_parse_naive_timestamp() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_micro_opt(10, 20, 30, 123_456)
            .unwrap();
        assert_eq!(parse_timestamp("2024-01-05T10:20:30.123456"), Ok(expected));
    }

    #[test]
    fn test_parse_rfc3339_timestamp() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2024-01-05T10:00:00+02:00"), Ok(expected));
    }

    #[test]
    fn test_parse_invalid_timestamp() {
        assert!(parse_timestamp("yesterday").is_err());
    }
}
