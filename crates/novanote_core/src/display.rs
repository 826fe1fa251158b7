//! Display helpers for note lists and exports.
//!
//! # Invariants
//! - Timestamp formatting never fails; unparseable input yields
//!   [`UNKNOWN_TIMESTAMP`].
//! - Export file names are never empty.

use chrono::{DateTime, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Shown in place of a timestamp that cannot be parsed.
pub const UNKNOWN_TIMESTAMP: &str = "Unknown";

const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const FALLBACK_FILE_STEM: &str = "note";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Formats a stored `updatedAt` value in local time.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (read as UTC
/// midnight).
pub fn format_updated_at(value: &str) -> String {
    match parse_timestamp(value.trim()) {
        Some(parsed) => parsed.format(DISPLAY_TIMESTAMP_FORMAT).to_string(),
        None => UNKNOWN_TIMESTAMP.to_string(),
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Local>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Local));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().with_timezone(&Local))
}

/// Derives a download file name from a note title, e.g. `My Plan` ->
/// `my-plan.md`.
pub fn export_file_name(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let slug = WHITESPACE_RE.replace_all(&lowered, "-");
    if slug.is_empty() {
        format!("{FALLBACK_FILE_STEM}.md")
    } else {
        format!("{slug}.md")
    }
}
