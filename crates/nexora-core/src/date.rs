//! Display formatting for article dates.

use chrono::NaiveDate;
use std::fmt::Write;

/// Default card/detail date format: `21 Oct 2025`.
pub const DEFAULT_DATE_FORMAT: &str = "%-d %b %Y";

/// Format an ISO `YYYY-MM-DD` date with a chrono strftime string.
///
/// Falls back to the stored text when the date does not parse or the format
/// string is invalid, so a bad record never breaks rendering.
pub fn format_date(iso: &str, format: &str) -> String {
    let Ok(date) = NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d") else {
        tracing::debug!(date = iso, "unparseable article date, showing raw");
        return iso.to_string();
    };
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        tracing::debug!(format, "invalid date format, showing raw");
        return iso.to_string();
    }
    out
}
