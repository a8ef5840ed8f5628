//! Console appender implementation

use crate::core::{Appender, LogEntry, LoggerError, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

/// Writes lines to the process's standard output or standard error.
pub struct ConsoleAppender {
    target: ConsoleTarget,
    use_colors: bool,
}

impl ConsoleAppender {
    /// Standard output, uncolored. This is a new logger's output.
    pub fn new() -> Self {
        Self::stdout()
    }

    pub fn stdout() -> Self {
        Self {
            target: ConsoleTarget::Stdout,
            use_colors: false,
        }
    }

    pub fn stderr() -> Self {
        Self {
            target: ConsoleTarget::Stderr,
            use_colors: false,
        }
    }

    /// Color each line by its level
    ///
    /// # Example
    ///
    /// ```
    /// use rust_named_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::stderr().with_colors(true);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    #[cfg(feature = "console")]
    fn decorate(&self, entry: &LogEntry, line: &str) -> String {
        if self.use_colors {
            line.color(entry.level.color_code()).to_string()
        } else {
            line.to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn decorate(&self, _entry: &LogEntry, line: &str) -> String {
        line.to_string()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, entry: &LogEntry, line: &str) -> Result<()> {
        let mut output = self.decorate(entry, line);
        output.push('\n');

        // The std handles lock internally, so each line lands whole
        let written = match self.target {
            ConsoleTarget::Stdout => std::io::stdout().lock().write_all(output.as_bytes()),
            ConsoleTarget::Stderr => std::io::stderr().lock().write_all(output.as_bytes()),
        };
        written.map_err(|e| LoggerError::sink_write(self.name(), e))
    }

    fn flush(&self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain_stdout() {
        let appender = ConsoleAppender::default();
        assert_eq!(appender.target(), ConsoleTarget::Stdout);
        assert_eq!(appender.name(), "stdout");
    }

    #[test]
    fn test_uncolored_line_is_unchanged() {
        let appender = ConsoleAppender::stderr();
        let entry = LogEntry::new(crate::LogLevel::ERROR, "app", "boom");
        assert_eq!(appender.decorate(&entry, "ERROR boom"), "ERROR boom");
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_colored_line_carries_ansi_escape() {
        colored::control::set_override(true);
        let appender = ConsoleAppender::stderr().with_colors(true);
        let entry = LogEntry::new(crate::LogLevel::ERROR, "app", "boom");

        let decorated = appender.decorate(&entry, "ERROR boom");
        assert!(decorated.contains("\x1b["), "decorated: {:?}", decorated);
        assert!(decorated.contains("ERROR boom"));
    }
}
