//! Logger configuration loaded from JSON or environment variables
//!
//! Every field is optional; [`Logger::apply_config`](crate::Logger::apply_config)
//! only touches the settings that are present.
//!
//! ```
//! use rust_named_logger::{LoggerConfig, LogLevel};
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "level": "debug",
//!     "format": "[${level}] ${message}",
//!     "output": "stderr"
//! }"#).unwrap();
//! assert_eq!(config.level, Some(LogLevel::DEBUG));
//! ```

use super::appender::Appender;
use super::error::{LoggerError, Result};
use super::format::CompiledFormat;
use super::log_level::LogLevel;
use crate::appenders::{ConsoleAppender, FileAppender};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Where a configured logger writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputConfig {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl OutputConfig {
    /// Open the described sink.
    pub fn open(&self) -> Result<Arc<dyn Appender>> {
        let appender: Arc<dyn Appender> = match self {
            OutputConfig::Stdout => Arc::new(ConsoleAppender::stdout()),
            OutputConfig::Stderr => Arc::new(ConsoleAppender::stderr()),
            OutputConfig::File(path) => {
                if path.as_os_str().is_empty() {
                    return Err(LoggerError::config("output", "empty file path"));
                }
                Arc::new(FileAppender::new(path.clone())?)
            }
        };
        Ok(appender)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Threshold; unknown names become `NONE`
    pub level: Option<LogLevel>,
    /// Format template
    pub format: Option<String>,
    /// strftime layout for `${time}`
    pub time_format: Option<String>,
    pub output: Option<OutputConfig>,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read `<PREFIX>_LEVEL`, `<PREFIX>_FORMAT`, `<PREFIX>_TIME_FORMAT`
    /// and `<PREFIX>_OUTPUT` (`stdout`, `stderr`, or a file path).
    pub fn from_env(prefix: &str) -> Self {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    fn from_lookup(prefix: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |suffix: &str| lookup(&format!("{}_{}", prefix, suffix));

        let output = var("OUTPUT").map(|value| match value.to_ascii_lowercase().as_str() {
            "stdout" => OutputConfig::Stdout,
            "stderr" => OutputConfig::Stderr,
            _ => OutputConfig::File(PathBuf::from(value)),
        });

        Self {
            level: var("LEVEL").map(|name| LogLevel::parse(&name)),
            format: var("FORMAT"),
            time_format: var("TIME_FORMAT"),
            output,
        }
    }

    /// Check the format template without applying anything.
    pub fn validate(&self) -> Result<()> {
        if let Some(format) = &self.format {
            CompiledFormat::compile(format)?;
        }
        Ok(())
    }
}
