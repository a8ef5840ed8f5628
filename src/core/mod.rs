//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod format;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod registry;
pub mod timestamp;

pub use appender::Appender;
pub use config::{LoggerConfig, OutputConfig};
pub use error::{LoggerError, Result};
pub use format::{CompiledFormat, Placeholder, DEFAULT_FORMAT};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use message::MessagePart;
pub use metrics::LoggerMetrics;
pub use registry::{get_logger, new_logger, LoggerRegistry};
pub use timestamp::{TimestampFormat, DEFAULT_TIME_LAYOUT};
