//! Timestamp helpers.
//!
//! All model timestamps are UTC and carry microsecond precision, so the
//! textual form written by [`format`] parses back to the exact same value.

use chrono::{DateTime, Datelike, NaiveDateTime, SubsecRound, Utc};

use crate::error::{ModelError, ModelResult};

/// Textual timestamp format used in attribute mappings.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

const WHOLE_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current time, truncated to microseconds.
pub fn now() -> DateTime<Utc> {
    truncate(Utc::now())
}

/// Drop sub-microsecond precision.
pub fn truncate(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(6)
}

pub fn format(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Reject instants outside years 1..=9999, the range [`TIMESTAMP_FORMAT`]
/// writes as a plain four-digit year.
pub fn ensure_in_range(ts: DateTime<Utc>) -> ModelResult<DateTime<Utc>> {
    if (1..=9999).contains(&ts.year()) {
        Ok(ts)
    } else {
        Err(ModelError::invalid_timestamp(format!(
            "{}: outside years 1..=9999",
            ts.to_rfc3339()
        )))
    }
}

/// Parse a timestamp written by [`format`].
///
/// Values without a fractional part are accepted as whole seconds.
pub fn parse(value: &str) -> ModelResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, WHOLE_SECONDS_FORMAT))
        .map(|naive| naive.and_utc())
        .map_err(|e| ModelError::invalid_timestamp(format!("{value:?}: {e}")))
}
