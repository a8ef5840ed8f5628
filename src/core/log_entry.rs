//! Log entry structure

use super::log_level::LogLevel;
use std::panic::Location;
use std::path::Path;

/// Values a single log call renders into its format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Timestamp already rendered with the logger's time layout
    pub time: String,
    /// Basename of the calling source file
    pub file: String,
    pub line: u32,
    /// Name of the emitting logger
    pub name: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            time: String::new(),
            file: String::new(),
            line: 0,
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_location(mut self, file: &str, line: u32) -> Self {
        self.file = basename(file).to_string();
        self.line = line;
        self
    }

    /// Record the call site captured by `#[track_caller]`.
    pub fn with_caller(self, location: &Location<'_>) -> Self {
        self.with_location(location.file(), location.line())
    }
}

/// Last path component of a source file path.
pub(crate) fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
