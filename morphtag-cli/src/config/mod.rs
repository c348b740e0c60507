//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Defaults applied when a flag is not given
    #[serde(default)]
    pub defaults: Defaults,
}

/// Default values for command-line flags
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct Defaults {
    /// Language code or name
    pub language: Option<String>,

    /// Grammar file, relative paths resolve against the config file
    pub grammar: Option<PathBuf>,

    /// Output format (`text` or `json`)
    pub format: Option<String>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        if let (Some(grammar), Some(base)) = (&config.defaults.grammar, path.parent()) {
            if grammar.is_relative() {
                config.defaults.grammar = Some(base.join(grammar));
            }
        }

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
