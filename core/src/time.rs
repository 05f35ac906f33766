//! Time related utils.

use crate::{Error, Result};
use chrono::NaiveDateTime;
use chrono::Utc;

/// DateTime is the alias of `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Format for ISO 8601 basic form without separators: "20220313T072004Z"
const ISO8601: &str = "%Y%m%dT%H%M%SZ";

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 basic form: "20220313T072004Z"
///
/// Sub-second precision is dropped.
pub fn format_iso8601(t: DateTime) -> String {
    t.format(ISO8601).to_string()
}

/// Parse time from ISO 8601 basic form: "20220313T072004Z"
///
/// Anything but exactly `YYYYMMDDTHHMMSSZ` is rejected.
pub fn parse_iso8601(s: &str) -> Result<DateTime> {
    let bs = s.as_bytes();
    if bs.len() != 16 || bs[8] != b'T' || bs[15] != b'Z' {
        return Err(Error::request_invalid(format!(
            "timestamp must be formatted as YYYYMMDDTHHMMSSZ, got {s:?}"
        )));
    }

    NaiveDateTime::parse_from_str(s, ISO8601)
        .map(|t| t.and_utc())
        .map_err(|e| {
            Error::request_invalid(format!("timestamp {s:?} is not a valid time")).with_source(e)
        })
}
