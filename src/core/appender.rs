//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// Destination of rendered log lines.
///
/// `line` is the entry rendered through the logger's format, without a
/// trailing newline. An appender writes one call's line as a unit; it is
/// shared between threads, so implementations guard their writer themselves.
pub trait Appender: Send + Sync {
    fn append(&self, entry: &LogEntry, line: &str) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
