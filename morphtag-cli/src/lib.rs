//! Morphtag CLI library
//!
//! This library provides the command-line interface for validating,
//! analysing and enumerating positional morphological tags.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod session;

pub use error::{CliError, CliResult};
pub use session::Session;
