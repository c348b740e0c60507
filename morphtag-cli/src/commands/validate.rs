//! Validate command implementation

use anyhow::Result;
use clap::Args;
use morphtag_core::PositionalGrammar;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the grammar file to validate
    #[arg(value_name = "FILE")]
    pub grammar: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        self.execute_to(io::stdout().lock())
    }

    /// Execute the validate command, writing the report to `writer`
    pub fn execute_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "Validating grammar: {}", self.grammar.display())?;

        match PositionalGrammar::from_file(&self.grammar) {
            Ok(grammar) => {
                writeln!(writer, "✓ Grammar is valid!")?;
                writeln!(writer, "  Name: {}", grammar.name())?;
                writeln!(writer, "  Tag width: {}", grammar.width())?;
                writeln!(writer, "  Fields: {}", grammar.fields().len())?;
                writeln!(writer, "  Paradigms: {}", grammar.paradigms().len())?;
                writeln!(writer, "  Tags: {}", grammar.tag_count())?;
                Ok(())
            }
            Err(e) => {
                writeln!(writer, "✗ Grammar is invalid!")?;
                writeln!(writer, "  Error: {e}")?;
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
