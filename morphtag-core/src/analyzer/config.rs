//! Grammar resource schema and validation
//!
//! This module defines the TOML schema for positional grammars.

use crate::tag::PLACEHOLDER;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Root grammar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarConfig {
    pub metadata: Metadata,
    pub fields: Vec<FieldConfig>,
    pub paradigms: Vec<ParadigmConfig>,
}

/// Grammar metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One positional field; fields are laid out in declaration order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    #[serde(default = "default_width")]
    pub width: usize,
    /// Code -> value name
    pub values: BTreeMap<String, String>,
}

/// A family of tags sharing a part of speech and a set of open slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParadigmConfig {
    pub name: String,
    /// Codes of the leading field
    pub part_of_speech: Vec<String>,
    /// Field name -> admissible single-character codes (`-` admits the placeholder)
    #[serde(default)]
    pub slots: BTreeMap<String, String>,
}

fn default_width() -> usize {
    1
}

impl GrammarConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.fields.is_empty() {
            return Err("No fields defined".to_string());
        }
        if self.paradigms.is_empty() {
            return Err("No paradigms defined".to_string());
        }

        let mut names = HashSet::new();
        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return Err(format!("Duplicate field '{}'", field.name));
            }
            if field.width == 0 {
                return Err(format!("Field '{}' has zero width", field.name));
            }
            if field.values.is_empty() {
                return Err(format!("Field '{}' has no values", field.name));
            }
            for code in field.values.keys() {
                if code.chars().count() != field.width {
                    return Err(format!(
                        "Code '{code}' of field '{}' does not have width {}",
                        field.name, field.width
                    ));
                }
                if code.chars().all(|c| c == PLACEHOLDER) {
                    return Err(format!(
                        "Field '{}' uses the placeholder as a value code",
                        field.name
                    ));
                }
            }
        }

        // The leading field carries the part of speech; all others are
        // single characters so that slots can list their codes as a string.
        let (head, rest) = self.fields.split_first().ok_or("No fields defined")?;
        if let Some(wide) = rest.iter().find(|f| f.width != 1) {
            return Err(format!(
                "Only the leading field may be wider than one character, '{}' is {}",
                wide.name, wide.width
            ));
        }

        for paradigm in &self.paradigms {
            if paradigm.part_of_speech.is_empty() {
                return Err(format!(
                    "Paradigm '{}' lists no part of speech",
                    paradigm.name
                ));
            }
            for code in &paradigm.part_of_speech {
                if !head.values.contains_key(code) {
                    return Err(format!(
                        "Paradigm '{}' uses unknown {} code '{code}'",
                        paradigm.name, head.name
                    ));
                }
            }
            for (slot, codes) in &paradigm.slots {
                let field = rest.iter().find(|f| &f.name == slot).ok_or_else(|| {
                    format!("Paradigm '{}' has unknown slot '{slot}'", paradigm.name)
                })?;
                if codes.is_empty() {
                    return Err(format!(
                        "Paradigm '{}' leaves slot '{slot}' empty",
                        paradigm.name
                    ));
                }
                for code in codes.chars() {
                    if code != PLACEHOLDER && !field.values.contains_key(&code.to_string()) {
                        return Err(format!(
                            "Paradigm '{}' uses unknown {slot} code '{code}'",
                            paradigm.name
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    /// Total tag width in characters
    pub fn width(&self) -> usize {
        self.fields.iter().map(|f| f.width).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> GrammarConfig {
        toml::from_str(toml_str).unwrap()
    }

    const MINIMAL: &str = r#"
[metadata]
name = "mini"

[[fields]]
name = "pos"
width = 2
values = { Nb = "noun", "A-" = "adjective" }

[[fields]]
name = "number"
values = { s = "singular", p = "plural" }

[[paradigms]]
name = "noun"
part_of_speech = ["Nb"]
[paradigms.slots]
number = "sp"

[[paradigms]]
name = "adjective"
part_of_speech = ["A-"]
"#;

    #[test]
    fn test_minimal_config_is_valid() {
        let config = parse(MINIMAL);
        assert!(config.validate().is_ok());
        assert_eq!(config.width(), 3);
        assert_eq!(config.fields[1].width, 1);
        assert_eq!(config.paradigms[0].slots["number"], "sp");
        assert!(config.paradigms[1].slots.is_empty());
    }

    #[test]
    fn test_unknown_slot_rejected() {
        let config = parse(&MINIMAL.replace("number = \"sp\"", "case = \"n\""));
        let err = config.validate().unwrap_err();
        assert!(err.contains("unknown slot 'case'"), "{err}");
    }

    #[test]
    fn test_unknown_slot_code_rejected() {
        let config = parse(&MINIMAL.replace("number = \"sp\"", "number = \"sd\""));
        let err = config.validate().unwrap_err();
        assert!(err.contains("unknown number code 'd'"), "{err}");
    }

    #[test]
    fn test_placeholder_slot_code_allowed() {
        let config = parse(&MINIMAL.replace("number = \"sp\"", "number = \"s-\""));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_wrong_code_width_rejected() {
        let config = parse(&MINIMAL.replace("Nb = \"noun\"", "N = \"noun\""));
        let err = config.validate().unwrap_err();
        assert!(err.contains("does not have width 2"), "{err}");
    }

    #[test]
    fn test_unknown_part_of_speech_rejected() {
        let config = parse(&MINIMAL.replace("[\"A-\"]", "[\"V-\"]"));
        let err = config.validate().unwrap_err();
        assert!(err.contains("unknown pos code 'V-'"), "{err}");
    }

    #[test]
    fn test_no_paradigms_rejected() {
        let config = GrammarConfig {
            paradigms: vec![],
            ..parse(MINIMAL)
        };
        assert_eq!(config.validate().unwrap_err(), "No paradigms defined");
    }
}
