//! Log level definitions
//!
//! Levels are ordered by ascending verbosity: `NONE < FATAL < ERROR <
//! WARNING < INFO < DEBUG`. A logger emits a message when the message level
//! is not `NONE` and does not exceed the logger's threshold.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Severity of a log message, or the threshold of a logger.
///
/// This is a thin wrapper over the numeric level rather than a closed enum:
/// [`Logger::set_level`](crate::Logger::set_level) stores any value as-is, and
/// values outside the named set render as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LogLevel(u8);

impl LogLevel {
    /// Disables a logger when used as a threshold; never emitted.
    pub const NONE: LogLevel = LogLevel(0);
    pub const FATAL: LogLevel = LogLevel(1);
    pub const ERROR: LogLevel = LogLevel(2);
    pub const WARNING: LogLevel = LogLevel(3);
    pub const INFO: LogLevel = LogLevel(4);
    pub const DEBUG: LogLevel = LogLevel(5);

    /// Every named level, in ascending verbosity.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::NONE,
        LogLevel::FATAL,
        LogLevel::ERROR,
        LogLevel::WARNING,
        LogLevel::INFO,
        LogLevel::DEBUG,
    ];

    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        LogLevel(value)
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Canonical upper-case name, or `""` for a value outside the named set.
    pub fn to_str(&self) -> &'static str {
        match *self {
            LogLevel::NONE => "NONE",
            LogLevel::FATAL => "FATAL",
            LogLevel::ERROR => "ERROR",
            LogLevel::WARNING => "WARNING",
            LogLevel::INFO => "INFO",
            LogLevel::DEBUG => "DEBUG",
            _ => "",
        }
    }

    /// Parse a level name, ignoring case.
    ///
    /// Unrecognized input yields [`LogLevel::NONE`] rather than an error, so
    /// a typo in a level name silently turns a logger off.
    ///
    /// ```
    /// use rust_named_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("debug"), LogLevel::DEBUG);
    /// assert_eq!(LogLevel::parse("verbose"), LogLevel::NONE);
    /// ```
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "FATAL" => LogLevel::FATAL,
            "ERROR" => LogLevel::ERROR,
            "WARNING" => LogLevel::WARNING,
            "INFO" => LogLevel::INFO,
            "DEBUG" => LogLevel::DEBUG,
            _ => LogLevel::NONE,
        }
    }

    /// Whether a logger with threshold `self` emits a message at `level`.
    #[inline]
    pub fn enables(self, level: LogLevel) -> bool {
        level != LogLevel::NONE && level <= self
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match *self {
            LogLevel::FATAL => BrightRed,
            LogLevel::ERROR => Red,
            LogLevel::WARNING => Yellow,
            LogLevel::INFO => Green,
            LogLevel::DEBUG => Blue,
            _ => BrightBlack,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl From<&str> for LogLevel {
    fn from(name: &str) -> Self {
        LogLevel::parse(name)
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(LogLevel::parse(&name))
    }
}
