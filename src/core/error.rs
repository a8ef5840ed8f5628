//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Format template without any recognized placeholder
    #[error("invalid format '{format}'")]
    InvalidFormat { format: String },

    /// Format template containing an unknown `${...}` token
    #[error("invalid verb '{verb}'")]
    InvalidVerb { verb: String },

    /// Write to an output sink failed
    #[error("write to sink '{sink}' failed: {source}")]
    SinkWrite {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an invalid format error naming the whole raw template
    pub fn invalid_format(format: impl Into<String>) -> Self {
        LoggerError::InvalidFormat {
            format: format.into(),
        }
    }

    /// Create an invalid verb error naming the offending `${...}` token
    pub fn invalid_verb(verb: impl Into<String>) -> Self {
        LoggerError::InvalidVerb { verb: verb.into() }
    }

    /// Create a sink write error
    pub fn sink_write(sink: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkWrite {
            sink: sink.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
