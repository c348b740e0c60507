//! Reading tag lists from files

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads one tag per line
pub struct TagReader;

impl TagReader {
    /// Read the tags of a file
    ///
    /// Blank lines and lines starting with `#` are skipped. Trailing line
    /// endings are removed, but tags are otherwise kept as written.
    pub fn read_tags(path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self::parse(&content))
    }

    /// Split text into tags
    pub fn parse(content: &str) -> Vec<String> {
        content
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
            .map(str::to_string)
            .collect()
    }
}
