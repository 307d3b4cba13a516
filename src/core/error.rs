//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Lookup of a logger name that was never configured
    #[error("the logger '{0}' does not exist")]
    UnknownLogger(String),

    /// Registry operation before the first build of a generation
    #[error("logger registry has not been built")]
    NotBuilt,

    /// Positional access past the end of a logger's pair list
    #[error("pair index {index} out of range ({len} pairs configured)")]
    PairOutOfRange { index: usize, len: usize },

    /// Formatter failure with format type
    #[error("formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },

    /// Writer error (generic)
    #[error("writer error: {0}")]
    WriterError(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an unknown-logger error
    pub fn unknown_logger(name: impl Into<String>) -> Self {
        LoggerError::UnknownLogger(name.into())
    }

    /// Create a pair out-of-range error
    pub fn pair_out_of_range(index: usize, len: usize) -> Self {
        LoggerError::PairOutOfRange { index, len }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create a writer error
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}
