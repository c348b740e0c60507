//! Shared state for one CLI invocation
//!
//! Resolves the grammar and defaults from flags and the config file, and
//! owns the validator the commands work with.

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::ValueEnum;
use morphtag_core::{LanguageKey, MorphtagValidator, PositionalGrammar};
use std::path::Path;

/// Validator plus resolved defaults
pub struct Session {
    validator: MorphtagValidator,
    config: CliConfig,
    quiet: bool,
}

impl Session {
    /// Build a session
    ///
    /// The grammar flag wins over the config file; without either the
    /// built-in grammar is used.
    pub fn new(grammar: Option<&Path>, config: Option<&Path>, quiet: bool) -> Result<Self> {
        let config = match config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let grammar = match grammar.or(config.defaults.grammar.as_deref()) {
            Some(path) => {
                log::info!("Using grammar {}", path.display());
                PositionalGrammar::from_file(path)
                    .with_context(|| format!("Failed to load grammar: {}", path.display()))?
            }
            None => morphtag_core::analyzer::builtin().context("Failed to load built-in grammar")?,
        };

        Ok(Self {
            validator: MorphtagValidator::new(grammar),
            config,
            quiet,
        })
    }

    /// The validator
    pub fn validator(&self) -> &MorphtagValidator {
        &self.validator
    }

    /// Whether progress output is suppressed
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Language from the flag, else the configured default
    pub fn language(&self, flag: Option<&str>) -> Option<LanguageKey> {
        flag.or(self.config.defaults.language.as_deref())
            .map(LanguageKey::parse)
    }

    /// Output format from the flag, else the configured default, else text
    pub fn format(&self, flag: Option<OutputFormat>) -> Result<OutputFormat> {
        if let Some(format) = flag {
            return Ok(format);
        }

        match self.config.defaults.format.as_deref() {
            Some(name) => OutputFormat::from_str(name, true)
                .map_err(|_| CliError::ConfigError(format!("unknown format '{name}'")).into()),
            None => Ok(OutputFormat::Text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_session() {
        let session = Session::new(None, None, true).unwrap();
        assert!(session.quiet());
        assert_eq!(session.validator().analyzer().name(), "proiel");
        assert_eq!(session.language(None), None);
        assert_eq!(session.language(Some("LA")), Some(LanguageKey::Latin));
        assert_eq!(session.format(None).unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("morphtag.toml");
        fs::write(&path, "[defaults]\nlanguage = \"got\"\nformat = \"json\"\n").unwrap();

        let session = Session::new(None, Some(&path), false).unwrap();
        assert_eq!(session.language(None), Some(LanguageKey::Gothic));
        assert_eq!(session.language(Some("cu")), Some(LanguageKey::OldChurchSlavonic));
        assert_eq!(session.format(None).unwrap(), OutputFormat::Json);
        assert_eq!(
            session.format(Some(OutputFormat::Text)).unwrap(),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_unknown_format_in_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("morphtag.toml");
        fs::write(&path, "[defaults]\nformat = \"xml\"\n").unwrap();

        let session = Session::new(None, Some(&path), false).unwrap();
        let err = session.format(None).unwrap_err();
        assert!(err.to_string().contains("unknown format 'xml'"));
    }

    #[test]
    fn test_missing_grammar_file() {
        let err = Session::new(Some(Path::new("/nonexistent/grammar.toml")), None, true)
            .err()
            .unwrap();
        assert!(err.to_string().contains("Failed to load grammar"));
    }
}
