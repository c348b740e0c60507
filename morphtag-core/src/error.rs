//! Error types for tag analysis and grammar loading
//!
//! Structural rejection and language restrictions are ordinary boolean
//! outcomes and never show up here. Only contract violations and resource
//! failures are errors.

use thiserror::Error;

/// Errors raised by the morphtag core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphtagError {
    /// The grammar has no analysis for the tag
    #[error("tag '{tag}' has no analysis")]
    NoAnalysis {
        /// The rejected tag
        tag: String,
    },

    /// The grammar produced more than one analysis for a single tag
    #[error("tag '{tag}' has {count} analyses, expected at most one")]
    AmbiguousAnalysis {
        /// The offending tag
        tag: String,
        /// Number of analyses produced
        count: usize,
    },

    /// The grammar resource could not be loaded or is malformed
    #[error("failed to initialize grammar from {origin}: {reason}")]
    ResourceInitialization {
        /// Where the grammar came from (file path or "built-in")
        origin: String,
        /// What went wrong
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl MorphtagError {
    pub(crate) fn resource(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        MorphtagError::ResourceInitialization {
            origin: origin.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for MorphtagError {
    fn from(err: std::io::Error) -> Self {
        MorphtagError::Io(err.to_string())
    }
}

/// Result type for morphtag operations
pub type Result<T> = std::result::Result<T, MorphtagError>;
