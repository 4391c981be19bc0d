//! Row structs and DTOs for the four dashboard tables.
//!
//! Each submodule contains:
//! - A `Deserialize` row struct matching the table's columns
//! - A create DTO holding the user-supplied fields of an insert
//! - An update DTO (all `Option` fields, `None` omitted) for partial patches

pub mod ip_asset;
pub mod legal_case;
pub mod legal_document;
pub mod misinformation_alert;
pub mod session;

use chrono::{NaiveDate, TimeZone, Utc};
use innovalex_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Deserializer};

/// Common behavior of rows held in a store's in-memory list.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> RecordId;

    fn created_at(&self) -> Timestamp;

    /// Fold a row returned by an update into this one. The default takes
    /// the returned row wholesale; rows carrying client-side columns keep
    /// them.
    fn merge_from(&mut self, updated: Self) {
        *self = updated;
    }
}

/// Deserialize a text column that may be `null` as an empty string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept either a full timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub(crate) fn flexible_timestamp<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flexible(&raw).map_err(serde::de::Error::custom)
}

/// Optional variant of [`flexible_timestamp`].
pub(crate) fn flexible_timestamp_opt<'de, D>(
    deserializer: D,
) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_flexible(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn parse_flexible(raw: &str) -> Result<Timestamp, String> {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| format!("invalid timestamp: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_bare_dates() {
        let ts = parse_flexible("2024-01-15T10:30:00+00:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-15T10:30:00+00:00");

        let day = parse_flexible("2024-01-15").unwrap();
        assert_eq!(day.to_rfc3339(), "2024-01-15T00:00:00+00:00");

        assert!(parse_flexible("15/01/2024").is_err());
    }
}
