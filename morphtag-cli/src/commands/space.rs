//! Space command implementation

use crate::progress::ProgressReporter;
use crate::session::Session;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the space command
#[derive(Debug, Args)]
pub struct SpaceArgs {
    /// Language whose restrictions apply
    #[arg(short, long, value_name = "LANG", env = "MORPHTAG_LANGUAGE")]
    pub language: Option<String>,

    /// Print only the number of tags
    #[arg(long)]
    pub count: bool,

    /// Write tags to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SpaceArgs {
    /// Execute the space command
    pub fn execute(&self, session: &Session) -> Result<()> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                self.execute_to(session, BufWriter::new(file))
            }
            None => self.execute_to(session, io::stdout().lock()),
        }
    }

    /// Execute the space command, writing tags to `writer`
    pub fn execute_to<W: Write>(&self, session: &Session, mut writer: W) -> Result<()> {
        let language = session.language(self.language.as_deref());
        let label = language.as_ref().map_or("all languages", |l| l.name());

        let mut progress = ProgressReporter::new(session.quiet());
        progress.start_spinner(format!("Enumerating tags for {label}"));
        let space = session.validator().tag_space(language.as_ref());
        progress.finish(format!("{} tags for {label}", space.len()));

        if self.count {
            writeln!(writer, "{}", space.len())?;
        } else {
            for tag in space.iter() {
                writeln!(writer, "{tag}")?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphtag_core::LanguageKey;
    use std::fs;
    use tempfile::TempDir;

    fn args(language: Option<&str>, count: bool) -> SpaceArgs {
        SpaceArgs {
            language: language.map(str::to_string),
            count,
            output: None,
        }
    }

    fn run(session: &Session, args: &SpaceArgs) -> String {
        let mut buffer = Vec::new();
        args.execute_to(session, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_count_matches_space() {
        let session = Session::new(None, None, true).unwrap();
        let expected = session
            .validator()
            .tag_space(Some(&LanguageKey::Latin))
            .len();

        let output = run(&session, &args(Some("la"), true));
        assert_eq!(output.trim(), expected.to_string());
    }

    #[test]
    fn test_listing_is_sorted_and_valid() {
        let session = Session::new(None, None, true).unwrap();
        let output = run(&session, &args(Some("hy"), false));

        let tags: Vec<&str> = output.lines().collect();
        assert!(!tags.is_empty());
        assert!(tags.windows(2).all(|w| w[0] < w[1]));

        let hy = LanguageKey::ClassicalArmenian;
        assert!(tags
            .iter()
            .all(|t| session.validator().is_valid(t, Some(&hy))));
        assert!(!tags.contains(&"Nb-s---fn---"));
    }

    #[test]
    fn test_language_space_is_smaller() {
        let session = Session::new(None, None, true).unwrap();
        let all: usize = run(&session, &args(None, true)).trim().parse().unwrap();
        let cu: usize = run(&session, &args(Some("cu"), true)).trim().parse().unwrap();
        assert!(cu < all);
    }

    #[test]
    fn test_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("got.tags");
        let session = Session::new(None, None, true).unwrap();

        let mut space = args(Some("got"), false);
        space.output = Some(path.clone());
        space.execute(&session).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.lines().any(|l| l == "Nb-d---fn---"));
        assert!(!content.lines().any(|l| l == "V-3saia-----"));
    }
}
