//! Text format for date-time form fields.
//!
//! Fields use the `YYYY-MM-DDTHH:MM` layout of an HTML `datetime-local`
//! input, interpreted as local wall-clock time. Seconds are accepted on
//! input and dropped on output.

use chrono::{DateTime, Local, NaiveDateTime, Timelike};

/// Output layout for form fields.
pub const FIELD_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Layouts accepted when parsing, tried in order.
const ACCEPTED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Error returned when a field does not hold a valid date-time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date-time {input:?} (expected YYYY-MM-DDTHH:MM)")]
pub struct DateTimeParseError {
    /// The rejected text, trimmed.
    pub input: String,
}

/// Parses a form field into a local date-time.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`DateTimeParseError`] if the text matches none of the accepted
/// layouts or names an impossible date.
pub fn parse_field(text: &str) -> Result<NaiveDateTime, DateTimeParseError> {
    let trimmed = text.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| DateTimeParseError {
            input: trimmed.to_string(),
        })
}

/// Formats a date-time for a form field, truncated to the minute.
#[must_use]
pub fn format_field(value: NaiveDateTime) -> String {
    value.format(FIELD_FORMAT).to_string()
}

/// Current local time truncated to the minute.
#[must_use]
pub fn now_minute() -> NaiveDateTime {
    truncate_to_minute(Local::now())
}

/// Drops seconds and sub-second precision from a local timestamp.
#[must_use]
pub fn truncate_to_minute(value: DateTime<Local>) -> NaiveDateTime {
    let naive = value.naive_local();
    naive
        .with_second(0)
        .and_then(|v| v.with_nanosecond(0))
        .unwrap_or(naive)
}
