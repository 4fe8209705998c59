//! Time related utils.

use chrono::Utc;

/// DateTime is the alias of `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Return the current UTC time.
///
/// Capture it once per signing call so key derivation and the string to sign
/// observe the same instant.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a date stamp like `20220313`.
///
/// This is the form used in credential scopes.
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format a full timestamp like `20220313T072004Z`.
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}
