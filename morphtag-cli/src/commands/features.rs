//! Features command implementation

use crate::output::{formatter, OutputFormat};
use crate::session::Session;
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

/// Arguments for the features command
#[derive(Debug, Args)]
pub struct FeaturesArgs {
    /// Tags to analyse
    #[arg(value_name = "TAG", required = true)]
    pub tags: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl FeaturesArgs {
    /// Execute the features command
    pub fn execute(&self, session: &Session) -> Result<()> {
        self.execute_to(session, io::stdout().lock())
    }

    /// Execute the features command, writing results to `writer`
    pub fn execute_to<W: Write>(&self, session: &Session, writer: W) -> Result<()> {
        let format = session.format(self.format)?;
        let mut out = formatter(format, writer);

        for tag in &self.tags {
            let bundle = session.validator().to_features(tag)?;
            out.format_features(tag, &bundle)?;
        }

        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphtag_core::MorphtagError;

    fn run(tags: &[&str], format: OutputFormat) -> (Result<()>, String) {
        let session = Session::new(None, None, true).unwrap();
        let args = FeaturesArgs {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            format: Some(format),
        };
        let mut buffer = Vec::new();
        let result = args.execute_to(&session, &mut buffer);
        (result, String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn test_text_features() {
        let (result, output) = run(&["Df-------c--"], OutputFormat::Text);
        assert!(result.is_ok());
        assert_eq!(
            output,
            "Df-------c--\tadverb\n  part_of_speech\tadverb\n  degree\tcomparative\n"
        );
    }

    #[test]
    fn test_json_features() {
        let (result, output) = run(&["Nb-s---fn---"], OutputFormat::Json);
        assert!(result.is_ok());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["paradigm"], "noun");
        assert_eq!(parsed[0]["features"]["gender"], "feminine");
    }

    #[test]
    fn test_unanalysable_tag() {
        let (result, _) = run(&["not-a-tag"], OutputFormat::Text);
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MorphtagError>(),
            Some(MorphtagError::NoAnalysis { .. })
        ));
    }
}
