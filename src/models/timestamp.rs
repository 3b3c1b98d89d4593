//! Submission timestamp text format.
//!
//! Contribution timestamps travel as `MM/DD/YYYY HH:MM:SS` (zero-padded,
//! 24-hour clock) in both directions.

use chrono::{NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{TrackerError, TrackerResult};

/// The `chrono` format string for submission timestamps.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Renders a timestamp in the wire format.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use salary_tracker::models::format_timestamp;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_opt(7, 5, 0)
///     .unwrap();
/// assert_eq!(format_timestamp(&at), "03/09/2024 07:05:00");
/// ```
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a timestamp from the wire format.
pub fn parse_timestamp(value: &str) -> TrackerResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        TrackerError::InvalidTimestamp {
            value: value.to_string(),
        }
    })
}

/// The current UTC time truncated to whole seconds.
///
/// The wire format carries no sub-second part, so stored timestamps drop it
/// too and render back exactly as they compare.
pub fn now() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Serde adapter for `#[serde(with = "...")]` on `NaiveDateTime` fields.
pub mod wire {
    use super::*;

    /// Serializes a timestamp in the wire format.
    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_timestamp(value))
    }

    /// Deserializes a timestamp from the wire format.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_timestamp(&text).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional timestamps.
pub mod wire_option {
    use super::*;

    /// Serializes an optional timestamp in the wire format.
    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&format_timestamp(value)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional timestamp from the wire format.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|text| parse_timestamp(&text).map_err(serde::de::Error::custom))
            .transpose()
    }
}
