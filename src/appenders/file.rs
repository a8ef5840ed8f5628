//! File appender implementation

use crate::core::{Appender, LogEntry, LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends lines to a file, flushing after every line.
pub struct FileAppender {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
    name: String,
}

impl FileAppender {
    /// Open `path` for appending, creating it if needed.
    ///
    /// ```no_run
    /// use rust_named_logger::appenders::FileAppender;
    ///
    /// let appender = FileAppender::new("/var/log/app.log").unwrap();
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let name = format!("file:{}", path.display());

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
            name,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&self, _entry: &LogEntry, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .and_then(|()| writer.flush())
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

impl Drop for FileAppender {
    fn drop(&mut self) {
        let _ = self.writer.get_mut().flush();
    }
}
