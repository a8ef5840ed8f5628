//! Appender over any byte stream

use crate::core::{Appender, LogEntry, LoggerError, Result};
use parking_lot::Mutex;
use std::io::Write;

/// Adapts a [`Write`] implementation into an [`Appender`].
///
/// The line and its newline go out in a single `write_all` under the
/// appender's lock, so concurrent callers never interleave within a line.
pub struct WriterAppender<W: Write + Send> {
    writer: Mutex<W>,
    name: String,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self::named("writer", writer)
    }

    pub fn named(name: impl Into<String>, writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            name: name.into(),
        }
    }

    /// Recover the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&self, _entry: &LogEntry, line: &str) -> Result<()> {
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');

        self.writer
            .lock()
            .write_all(&buf)
            .map_err(|e| LoggerError::sink_write(self.name.as_str(), e))
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
