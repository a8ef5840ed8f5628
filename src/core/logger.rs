//! Main logger implementation

use super::{
    appender::Appender,
    config::LoggerConfig,
    error::Result,
    format::CompiledFormat,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    registry::LoggerRegistry,
    timestamp::TimestampFormat,
};
use crate::appenders::{ConsoleAppender, WriterAppender};
use parking_lot::RwLock;
use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

/// Exit status of the process after a fatal message
pub const FATAL_EXIT_CODE: i32 = 1;

/// Print a diagnostic on stderr, ignoring failures.
///
/// `eprintln!` panics when stderr is closed; a log call must not.
fn report(args: fmt::Arguments<'_>) {
    let _ = writeln!(std::io::stderr(), "{}", args);
}

/// Configuration a log call works from.
///
/// Setters replace the whole value under the write lock; a log call clones
/// the `Arc` under the read lock and renders from that snapshot.
#[derive(Clone)]
struct LoggerState {
    level: LogLevel,
    format: Arc<CompiledFormat>,
    time_format: TimestampFormat,
    output: Arc<dyn Appender>,
}

impl Default for LoggerState {
    fn default() -> Self {
        Self {
            level: LogLevel::INFO,
            format: Arc::new(CompiledFormat::default()),
            time_format: TimestampFormat::default(),
            output: Arc::new(ConsoleAppender::stdout()),
        }
    }
}

/// A named, leveled logger.
///
/// All methods take `&self`; a logger is meant to be shared as
/// `Arc<Logger>`, usually through a [`LoggerRegistry`](crate::LoggerRegistry).
///
/// # Example
///
/// ```
/// use rust_named_logger::{appenders::MemoryAppender, Logger, LogLevel};
///
/// let logger = Logger::new("db");
/// let buffer = MemoryAppender::new();
/// logger.set_appender(buffer.clone());
/// logger.set_level(LogLevel::WARNING);
///
/// logger.info("connected");
/// logger.warning("slow query");
///
/// let lines = buffer.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].ends_with("db: slow query"));
/// ```
pub struct Logger {
    name: String,
    state: RwLock<Arc<LoggerState>>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger with the default configuration: `INFO` threshold,
    /// the default format and time layout, and standard output.
    ///
    /// The logger is not registered anywhere; see
    /// [`LoggerRegistry::create`](crate::LoggerRegistry::create).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(Arc::new(LoggerState::default())),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the threshold. Any value is stored as-is.
    pub fn set_level(&self, level: LogLevel) {
        let mut state = self.state.write();
        Arc::make_mut(&mut *state).level = level;
    }

    pub fn level(&self) -> LogLevel {
        self.state.read().level
    }

    /// Compile and install a format template.
    ///
    /// On error the current format stays in place.
    ///
    /// ```
    /// use rust_named_logger::{Logger, LoggerError};
    ///
    /// let logger = Logger::new("app");
    /// assert!(logger.set_format("${time} | ${message}").is_ok());
    ///
    /// let err = logger.set_format("${when} ${message}").unwrap_err();
    /// assert!(matches!(err, LoggerError::InvalidVerb { .. }));
    /// assert_eq!(logger.format().source(), "${time} | ${message}");
    /// ```
    pub fn set_format(&self, format: &str) -> Result<()> {
        let mut state = self.state.write();
        let compiled = CompiledFormat::compile(format)?;
        Arc::make_mut(&mut *state).format = Arc::new(compiled);
        Ok(())
    }

    /// The format currently in use.
    pub fn format(&self) -> Arc<CompiledFormat> {
        Arc::clone(&self.state.read().format)
    }

    /// Set the time layout. Strings are taken as strftime layouts and are
    /// not validated.
    pub fn set_time_format(&self, layout: impl Into<TimestampFormat>) {
        let layout = layout.into();
        let mut state = self.state.write();
        Arc::make_mut(&mut *state).time_format = layout;
    }

    pub fn time_format(&self) -> TimestampFormat {
        self.state.read().time_format.clone()
    }

    /// Send output to any byte stream.
    pub fn set_output<W: Write + Send + 'static>(&self, writer: W) {
        self.set_appender(WriterAppender::new(writer));
    }

    /// Send output to an appender.
    pub fn set_appender<A: Appender + 'static>(&self, appender: A) {
        self.set_shared_appender(Arc::new(appender));
    }

    /// Send output to an appender shared with other loggers.
    pub fn set_shared_appender(&self, appender: Arc<dyn Appender>) {
        let mut state = self.state.write();
        Arc::make_mut(&mut *state).output = appender;
    }

    /// Apply every setting present in `config`.
    ///
    /// The format is compiled and the output opened before anything is
    /// changed, so a failing config leaves the logger untouched.
    pub fn apply_config(&self, config: &LoggerConfig) -> Result<()> {
        let format = config
            .format
            .as_deref()
            .map(CompiledFormat::compile)
            .transpose()?;
        let output = config.output.as_ref().map(|o| o.open()).transpose()?;

        let mut guard = self.state.write();
        let state = Arc::make_mut(&mut *guard);
        if let Some(level) = config.level {
            state.level = level;
        }
        if let Some(format) = format {
            state.format = Arc::new(format);
        }
        if let Some(layout) = &config.time_format {
            state.time_format = TimestampFormat::from(layout.as_str());
        }
        if let Some(output) = output {
            state.output = output;
        }
        Ok(())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let output = Arc::clone(&self.snapshot().output);
        output.flush()
    }

    fn snapshot(&self) -> Arc<LoggerState> {
        Arc::clone(&self.state.read())
    }

    /// Gate, render and write one message on behalf of `location`.
    fn emit(&self, level: LogLevel, message: &dyn fmt::Display, location: &Location<'_>) {
        let state = self.snapshot();
        if !state.level.enables(level) {
            self.metrics.record_filtered();
            return;
        }

        let entry = LogEntry::new(level, self.name.as_str(), message.to_string())
            .with_time(state.time_format.now())
            .with_caller(location);
        let line = state.format.render(&entry);

        self.write(&state, &entry, &line);
    }

    /// Write a rendered line; failures are reported on stderr only.
    fn write(&self, state: &LoggerState, entry: &LogEntry, line: &str) {
        let output = &state.output;
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            output.append(entry, line)
        }));

        match result {
            Ok(Ok(())) => {
                self.metrics.record_logged();
            }
            Ok(Err(e)) => {
                report(format_args!(
                    "[LOGGER ERROR] Logger '{}' failed to write to '{}': {}",
                    self.name,
                    output.name(),
                    e
                ));
                self.metrics.record_dropped();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                report(format_args!(
                    "[LOGGER CRITICAL] Logger '{}' output '{}' panicked: {}",
                    self.name,
                    output.name(),
                    panic_msg
                ));
                self.metrics.record_dropped();
            }
        }
    }

    fn terminate(&self) -> ! {
        let flushed = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| self.flush()));
        if let Ok(Err(e)) = flushed {
            report(format_args!(
                "[LOGGER ERROR] Logger '{}' failed to flush before exit: {}",
                self.name, e
            ));
        }
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Log a message at `level`.
    ///
    /// Logging at [`LogLevel::FATAL`] here writes the line but does not
    /// exit; use [`fatal`](Self::fatal) for that.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.emit(level, &message, Location::caller());
    }

    /// Log pre-formatted arguments at `level`, usually via [`log!`](crate::log).
    #[track_caller]
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.emit(level, &args, Location::caller());
    }

    /// Log at `FATAL`, then exit the process with [`FATAL_EXIT_CODE`].
    ///
    /// The process exits even when the threshold suppressed the line or the
    /// write failed.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.emit(LogLevel::FATAL, &message, Location::caller());
        self.terminate()
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit(LogLevel::FATAL, &args, Location::caller());
        self.terminate()
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(LogLevel::ERROR, &message, Location::caller());
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::ERROR, &args, Location::caller());
    }

    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.emit(LogLevel::WARNING, &message, Location::caller());
    }

    #[track_caller]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::WARNING, &args, Location::caller());
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(LogLevel::INFO, &message, Location::caller());
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::INFO, &args, Location::caller());
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(LogLevel::DEBUG, &message, Location::caller());
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::DEBUG, &args, Location::caller());
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.snapshot();
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &state.level)
            .field("format", &state.format.source())
            .field("time_format", &state.time_format)
            .field("output", &state.output.name())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_named_logger::prelude::*;
///
/// let logger = Logger::builder("worker")
///     .level(LogLevel::DEBUG)
///     .format("[${level}] ${name}: ${message}")
///     .time_format("%H:%M:%S")
///     .appender(ConsoleAppender::stderr())
///     .build()
///     .unwrap();
/// assert_eq!(logger.level(), LogLevel::DEBUG);
/// ```
pub struct LoggerBuilder {
    name: String,
    level: LogLevel,
    format: Option<String>,
    time_format: TimestampFormat,
    appender: Option<Arc<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::INFO,
            format: None,
            time_format: TimestampFormat::default(),
            appender: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Format template, compiled by [`build`](Self::build)
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, layout: impl Into<TimestampFormat>) -> Self {
        self.time_format = layout.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Arc::new(appender));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.appender(WriterAppender::new(writer))
    }

    /// Build the Logger, failing if the format template does not compile
    pub fn build(self) -> Result<Logger> {
        let logger = Logger::new(self.name);
        if let Some(format) = &self.format {
            logger.set_format(format)?;
        }
        logger.set_level(self.level);
        logger.set_time_format(self.time_format);
        if let Some(appender) = self.appender {
            logger.set_shared_appender(appender);
        }
        Ok(logger)
    }

    /// Build the logger and register it in `registry`, replacing any
    /// logger already registered under the same name.
    pub fn register(self, registry: &LoggerRegistry) -> Result<Arc<Logger>> {
        Ok(registry.insert(self.build()?))
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}
