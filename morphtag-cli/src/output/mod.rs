//! Output formatting module

use anyhow::Result;
use morphtag_core::{FeatureBundle, TagCheck};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per result
    Text,
    /// JSON documents
    Json,
}

/// Result of checking one tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    /// The tag as given
    pub tag: String,
    /// Whether the tag is valid
    pub valid: bool,
    /// Why the tag is invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Forbidden feature categories the tag expresses
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub forbidden: Vec<String>,
}

impl CheckRecord {
    /// Build a record from a verdict
    pub fn new(tag: &str, check: &TagCheck) -> Self {
        let (reason, forbidden) = match check {
            TagCheck::Valid => (None, Vec::new()),
            TagCheck::Rejected => (Some("rejected by grammar".to_string()), Vec::new()),
            TagCheck::Forbidden(categories) => (
                Some("forbidden in language".to_string()),
                categories.iter().map(|c| c.name().to_string()).collect(),
            ),
        };

        Self {
            tag: tag.to_string(),
            valid: check.is_valid(),
            reason,
            forbidden,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the verdict for one tag
    fn format_check(&mut self, record: &CheckRecord) -> Result<()>;

    /// Format the analysis of one tag
    fn format_features(&mut self, tag: &str, bundle: &FeatureBundle) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Formatter for `format` writing to `writer`
pub fn formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}
