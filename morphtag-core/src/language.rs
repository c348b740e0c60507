//! Target language identifiers
//!
//! Codes and names are canonicalised on parse, so `"LA"`, `" la "` and
//! `"latin"` all denote the same language. Any other text is kept as an
//! unmodelled language rather than rejected.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A language whose restrictions apply to tags
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguageKey {
    /// Latin (`la`)
    Latin,
    /// Ancient Greek (`grc`)
    AncientGreek,
    /// Classical Armenian (`hy`)
    ClassicalArmenian,
    /// Gothic (`got`)
    Gothic,
    /// Old Church Slavonic (`cu`)
    OldChurchSlavonic,
    /// Any language without a profile
    Other(UnknownLanguage),
}

/// Canonical code of a language without a profile
///
/// Only [`LanguageKey::parse`] builds one, so the code is trimmed,
/// lower-cased and never one of the modelled languages.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnknownLanguage(String);

impl UnknownLanguage {
    /// The canonical code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl LanguageKey {
    /// Languages with a modelled profile
    pub const KNOWN: [LanguageKey; 5] = [
        LanguageKey::Latin,
        LanguageKey::AncientGreek,
        LanguageKey::ClassicalArmenian,
        LanguageKey::Gothic,
        LanguageKey::OldChurchSlavonic,
    ];

    /// Parse and canonicalise a language code or name
    pub fn parse(input: &str) -> Self {
        let canonical = input.trim().to_ascii_lowercase();

        match canonical.as_str() {
            "la" | "lat" | "latin" => LanguageKey::Latin,
            "grc" | "greek" | "ancient_greek" | "ancient greek" => LanguageKey::AncientGreek,
            "hy" | "xcl" | "armenian" | "classical_armenian" | "classical armenian" => {
                LanguageKey::ClassicalArmenian
            }
            "got" | "gothic" => LanguageKey::Gothic,
            "cu" | "chu" | "old_church_slavonic" | "old church slavonic" => {
                LanguageKey::OldChurchSlavonic
            }
            _ => LanguageKey::Other(UnknownLanguage(canonical)),
        }
    }

    /// Canonical code
    pub fn code(&self) -> &str {
        match self {
            LanguageKey::Latin => "la",
            LanguageKey::AncientGreek => "grc",
            LanguageKey::ClassicalArmenian => "hy",
            LanguageKey::Gothic => "got",
            LanguageKey::OldChurchSlavonic => "cu",
            LanguageKey::Other(code) => code.as_str(),
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &str {
        match self {
            LanguageKey::Latin => "Latin",
            LanguageKey::AncientGreek => "Ancient Greek",
            LanguageKey::ClassicalArmenian => "Classical Armenian",
            LanguageKey::Gothic => "Gothic",
            LanguageKey::OldChurchSlavonic => "Old Church Slavonic",
            LanguageKey::Other(code) => code.as_str(),
        }
    }

    /// Whether the language has a profile of its own
    pub fn is_known(&self) -> bool {
        !matches!(self, LanguageKey::Other(_))
    }
}

impl fmt::Display for LanguageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LanguageKey::parse(s))
    }
}

impl From<&str> for LanguageKey {
    fn from(s: &str) -> Self {
        LanguageKey::parse(s)
    }
}

impl From<String> for LanguageKey {
    fn from(s: String) -> Self {
        LanguageKey::parse(&s)
    }
}

impl From<LanguageKey> for String {
    fn from(key: LanguageKey) -> Self {
        key.code().to_string()
    }
}
