//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific failures
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),
    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Some checked tags were invalid
    #[error("{invalid} of {total} tags are invalid")]
    InvalidTags {
        /// Number of invalid tags
        invalid: usize,
        /// Number of tags checked
        total: usize,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
