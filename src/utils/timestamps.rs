use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Rendered in place of a date when the log timestamp cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse a log timestamp (RFC 3339, e.g. `2025-11-02T09:41:20.016Z`)
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp.trim()).ok().map(|dt| dt.with_timezone(&Utc))
}

/// Render a log timestamp in the local time zone, e.g. `1/15/2025, 3:04:05 PM`
pub fn format_local_date(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(dt) => format_date(&dt.with_timezone(&Local)),
        None => INVALID_DATE.to_string(),
    }
}

fn format_date<Tz: chrono::TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Current instant as RFC 3339 UTC with milliseconds, e.g. `2025-01-15T15:04:05.123Z`
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Make an RFC 3339 instant safe to embed in a file name
pub fn file_name_safe(instant: &str) -> String {
    instant.replace([':', '.'], "-")
}
