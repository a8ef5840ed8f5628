//! Timestamp formatting utilities
//!
//! Provides the time layouts a logger can render its `${time}` field with.
//! The default is a plain `YYYY-MM-DD HH:MM:SS` date-time in local time.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// strftime layout of [`TimestampFormat::DateTime`].
pub const DEFAULT_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp layout options
///
/// # Examples
///
/// ```
/// use rust_named_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::default().format(&at), "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45`
    #[default]
    DateTime,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime layout
    ///
    /// The layout is not validated when it is set. A layout chrono cannot
    /// render comes out verbatim in place of the timestamp.
    Custom(String),
}

impl TimestampFormat {
    /// Format a datetime according to this layout
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::DateTime => render_layout(datetime, DEFAULT_TIME_LAYOUT),
            TimestampFormat::Iso8601 => render_layout(datetime, "%Y-%m-%dT%H:%M:%S%.3f"),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(layout) => render_layout(datetime, layout),
        }
    }

    /// Format the current local time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}

impl From<&str> for TimestampFormat {
    fn from(layout: &str) -> Self {
        TimestampFormat::Custom(layout.to_string())
    }
}

impl From<String> for TimestampFormat {
    fn from(layout: String) -> Self {
        TimestampFormat::Custom(layout)
    }
}

/// Render a strftime layout without panicking on bad specifiers.
fn render_layout<Tz>(datetime: &DateTime<Tz>, layout: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let items = StrftimeItems::new(layout);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        return layout.to_string();
    }

    let mut out = String::with_capacity(layout.len() + 16);
    match write!(out, "{}", datetime.format_with_items(items)) {
        Ok(()) => out,
        Err(_) => layout.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn test_default_format() {
        let result = TimestampFormat::default().format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45"));
        assert!(result.contains("+00:00") || result.ends_with('Z'));
    }

    #[test]
    fn test_unix_formats() {
        let secs: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix timestamp");
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix millis timestamp");
        assert_eq!(millis, secs * 1000 + 123);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::from("%Y/%m/%d %H:%M");
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_invalid_custom_layout_does_not_panic() {
        let format = TimestampFormat::from("%Q-%Y");
        assert_eq!(format.format(&fixed_datetime()), "%Q-%Y");

        let format = TimestampFormat::from("%");
        assert_eq!(format.format(&fixed_datetime()), "%");
    }

    #[test]
    fn test_layout_without_specifiers_is_literal() {
        let format = TimestampFormat::from("sometime");
        assert_eq!(format.format(&fixed_datetime()), "sometime");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::Rfc3339).expect("serialize");
        assert_eq!(json, "\"Rfc3339\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
