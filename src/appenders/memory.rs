//! In-memory appender

use crate::core::{Appender, LogEntry, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects lines in memory. Clones share the same buffer.
///
/// ```
/// use rust_named_logger::{appenders::MemoryAppender, Logger};
///
/// let logger = Logger::new("T");
/// let buffer = MemoryAppender::new();
/// logger.set_appender(buffer.clone());
/// logger.set_format("[${level}] ${message}").unwrap();
///
/// logger.info("ok");
/// assert_eq!(buffer.lines(), vec!["[INFO] ok".to_string()]);
/// ```
#[derive(Clone, Default)]
pub struct MemoryAppender {
    buffer: Arc<Mutex<String>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, newlines included.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Appender for MemoryAppender {
    fn append(&self, _entry: &LogEntry, line: &str) -> Result<()> {
        let mut buffer = self.buffer.lock();
        buffer.push_str(line);
        buffer.push('\n');
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
