//! Logging macros for ergonomic log message formatting.
//!
//! These macros take `format!`-style arguments and call the formatted
//! logger methods, so the call site recorded is the line of the macro.
//!
//! # Examples
//!
//! ```
//! use rust_named_logger::prelude::*;
//! use rust_named_logger::{info, warning};
//!
//! let logger = Logger::new("server");
//! # logger.set_appender(MemoryAppender::new());
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warning!(logger, "{} of {} workers busy", 7, 8);
//! ```

/// Log a formatted message at a given level.
///
/// # Examples
///
/// ```
/// # use rust_named_logger::prelude::*;
/// # let logger = Logger::new("app");
/// # logger.set_appender(MemoryAppender::new());
/// use rust_named_logger::log;
/// log!(logger, LogLevel::INFO, "Simple message");
/// log!(logger, LogLevel::ERROR, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log a fatal message and exit the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_named_logger::prelude::*;
/// # let logger = Logger::new("app");
/// # logger.set_appender(MemoryAppender::new());
/// use rust_named_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_named_logger::prelude::*;
/// # let logger = Logger::new("app");
/// # logger.set_appender(MemoryAppender::new());
/// use rust_named_logger::debug;
/// logger.set_level(LogLevel::DEBUG);
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Join operands into a message, spacing adjacent non-text operands.
///
/// ```
/// # use rust_named_logger::prelude::*;
/// # let logger = Logger::new("app");
/// # logger.set_appender(MemoryAppender::new());
/// use rust_named_logger::concat_message;
/// logger.info(concat_message!("took ", 12, "ms"));
/// ```
#[macro_export]
macro_rules! concat_message {
    ($($part:expr),+ $(,)?) => {
        $crate::core::message::concat(&[$(&$part as &dyn $crate::core::message::MessagePart),+])
    };
}
