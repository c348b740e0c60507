//! JSON output formatter

use super::{CheckRecord, OutputFormatter};
use anyhow::Result;
use morphtag_core::FeatureBundle;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Write;

/// JSON formatter - outputs results as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<Value>,
}

/// Data structure for JSON feature output
#[derive(Debug, Serialize, Deserialize)]
pub struct FeaturesData {
    /// The analysed tag
    pub tag: String,
    /// Paradigm that accepted the tag
    pub paradigm: String,
    /// Feature name to value name
    pub features: BTreeMap<String, String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_check(&mut self, record: &CheckRecord) -> Result<()> {
        self.entries.push(serde_json::to_value(record)?);
        Ok(())
    }

    fn format_features(&mut self, tag: &str, bundle: &FeatureBundle) -> Result<()> {
        let data = FeaturesData {
            tag: tag.to_string(),
            paradigm: bundle.paradigm.clone(),
            features: bundle
                .iter()
                .map(|f| (f.name.clone(), f.value.clone()))
                .collect(),
        };
        self.entries.push(serde_json::to_value(data)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
