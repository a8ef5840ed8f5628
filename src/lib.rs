//! # Rust Named Logger
//!
//! A small leveled logging library built around named loggers.
//!
//! ## Features
//!
//! - **Named loggers**: create and look up loggers by name through a registry
//! - **Format templates**: `${time} ${level} ${file} ${line} ${name} ${message}`
//! - **Call sites**: file and line of the caller, captured with `#[track_caller]`
//! - **Thread safe**: reconfigure a logger while other threads log through it
//!
//! ```
//! use rust_named_logger::prelude::*;
//! use rust_named_logger::info;
//!
//! let registry = LoggerRegistry::new();
//! let logger = registry.create("app");
//! let buffer = MemoryAppender::new();
//! logger.set_appender(buffer.clone());
//! logger.set_format("[${level}] ${name}: ${message}").unwrap();
//!
//! info!(logger, "listening on port {}", 8080);
//! assert_eq!(buffer.lines(), vec!["[INFO] app: listening on port 8080".to_string()]);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
    pub use crate::core::{
        get_logger, new_logger, Appender, CompiledFormat, LogEntry, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, LoggerRegistry, OutputConfig,
        Result, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
pub use crate::core::{
    get_logger, new_logger, Appender, CompiledFormat, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, LoggerRegistry, MessagePart, OutputConfig,
    Placeholder, Result, TimestampFormat, DEFAULT_FORMAT, DEFAULT_TIME_LAYOUT, FATAL_EXIT_CODE,
};
