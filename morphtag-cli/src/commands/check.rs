//! Check command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, TagReader};
use crate::output::{formatter, CheckRecord, OutputFormat};
use crate::session::Session;
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Tags to check
    #[arg(value_name = "TAG")]
    pub tags: Vec<String>,

    /// Files of tags, one per line (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Language whose restrictions apply
    #[arg(short, long, value_name = "LANG", env = "MORPHTAG_LANGUAGE")]
    pub language: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, session: &Session) -> Result<()> {
        self.execute_to(session, io::stdout().lock())
    }

    /// Execute the check command, writing results to `writer`
    pub fn execute_to<W: Write>(&self, session: &Session, writer: W) -> Result<()> {
        let tags = self.collect_tags()?;
        if tags.is_empty() {
            anyhow::bail!("No tags given; pass tags as arguments or use --input");
        }

        let language = session.language(self.language.as_deref());
        let format = session.format(self.format)?;
        log::info!(
            "Checking {} tags against {}",
            tags.len(),
            language.as_ref().map_or("no language", |l| l.code())
        );

        let validator = session.validator();
        let mut out = formatter(format, writer);
        let mut invalid = 0;

        for tag in &tags {
            let check = validator.check(tag, language.as_ref());
            if !check.is_valid() {
                invalid += 1;
            }
            out.format_check(&CheckRecord::new(tag, &check))?;
        }
        out.finish()?;

        if invalid > 0 {
            return Err(CliError::InvalidTags {
                invalid,
                total: tags.len(),
            }
            .into());
        }

        Ok(())
    }

    fn collect_tags(&self) -> Result<Vec<String>> {
        let mut tags = self.tags.clone();

        if !self.input.is_empty() {
            for path in resolve_patterns(&self.input)? {
                log::debug!("Reading tags from {}", path.display());
                tags.extend(TagReader::read_tags(&path)?);
            }
        }

        Ok(tags)
    }
}
