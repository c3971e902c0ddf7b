//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// End date before start date where a forward range is required.
    #[error("Invalid range: {end} precedes {start}.")]
    InvalidRange {
        /// Start of the range.
        start: String,
        /// End of the range.
        end: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read or written.
    #[error("Cannot access {path}: {source}")]
    ConfigFile {
        /// Location of the file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
