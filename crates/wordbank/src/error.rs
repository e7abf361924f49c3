//! Error types for the wordbank library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wordbank operations.
#[derive(Debug, Error)]
pub enum WordbankError {
    /// The input file does not exist.
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("Invalid UTF-8 in '{path}': {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Stripped text is still not strict JSON.
    #[error("Parse error at line {line} column {column}: {message}\n  near: {context}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
        /// Trimmed content of the offending line.
        context: String,
    },

    /// The top-level value is not an array.
    #[error("Root value is {found}, expected an array of records")]
    RootNotArray { found: &'static str },

    /// No records left after flattening.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl WordbankError {
    /// Wrap an IO error, mapping a missing file to [`WordbankError::NotFound`].
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            WordbankError::NotFound { path }
        } else {
            WordbankError::Io { path, source }
        }
    }
}

/// Result type alias for wordbank operations.
pub type Result<T> = std::result::Result<T, WordbankError>;
