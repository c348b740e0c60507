//! Plain text output formatter

use super::{CheckRecord, OutputFormatter};
use anyhow::Result;
use morphtag_core::FeatureBundle;
use std::io::Write;

/// Plain text formatter - tab-separated, one result per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_check(&mut self, record: &CheckRecord) -> Result<()> {
        if record.valid {
            writeln!(self.writer, "{}\tvalid", record.tag)?;
        } else if record.forbidden.is_empty() {
            writeln!(
                self.writer,
                "{}\tinvalid\t{}",
                record.tag,
                record.reason.as_deref().unwrap_or_default()
            )?;
        } else {
            writeln!(
                self.writer,
                "{}\tinvalid\tforbidden: {}",
                record.tag,
                record.forbidden.join(", ")
            )?;
        }
        Ok(())
    }

    fn format_features(&mut self, tag: &str, bundle: &FeatureBundle) -> Result<()> {
        writeln!(self.writer, "{tag}\t{}", bundle.paradigm)?;
        for feature in bundle.iter() {
            writeln!(self.writer, "  {}\t{}", feature.name, feature.value)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
