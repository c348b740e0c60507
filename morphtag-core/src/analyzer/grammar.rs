//! Table-driven positional grammar
//!
//! A grammar is a list of fields laid out left to right and a list of
//! paradigms. The leading field holds the part of speech; every other field
//! is one character wide. A paradigm admits a set of part-of-speech codes
//! and, per field, a set of characters. Fields a paradigm does not mention
//! must hold the placeholder.

use super::config::GrammarConfig;
use super::TagAnalyzer;
use crate::analysis::FeatureBundle;
use crate::error::{MorphtagError, Result};
use crate::tag::{Tag, PLACEHOLDER};
use std::collections::BTreeMap;
use std::path::Path;

/// A positional field of the tag scheme
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    width: usize,
    values: BTreeMap<String, String>,
}

impl Field {
    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in characters
    pub fn width(&self) -> usize {
        self.width
    }

    /// Value name for a code
    pub fn value_name(&self, code: &str) -> Option<&str> {
        self.values.get(code).map(String::as_str)
    }
}

/// A compiled paradigm
#[derive(Debug, Clone)]
pub struct Paradigm {
    name: String,
    heads: Vec<String>,
    /// Admissible characters for each non-leading field, never empty
    slots: Vec<Vec<char>>,
}

impl Paradigm {
    /// Paradigm name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of tags the paradigm generates
    pub fn tag_count(&self) -> usize {
        self.slots
            .iter()
            .map(Vec::len)
            .fold(self.heads.len(), usize::saturating_mul)
    }

    fn admits(&self, head: &str, rest: impl IntoIterator<Item = char>) -> bool {
        self.heads.iter().any(|h| h == head)
            && self
                .slots
                .iter()
                .zip(rest)
                .all(|(slot, ch)| slot.contains(&ch))
    }
}

/// Grammar over fixed-width positional tags
#[derive(Debug, Clone)]
pub struct PositionalGrammar {
    name: String,
    description: String,
    width: usize,
    fields: Vec<Field>,
    paradigms: Vec<Paradigm>,
}

impl PositionalGrammar {
    /// Compile a validated configuration
    ///
    /// `origin` names the resource in error messages.
    pub fn from_config(config: &GrammarConfig, origin: &str) -> Result<Self> {
        config
            .validate()
            .map_err(|reason| MorphtagError::resource(origin, reason))?;

        let fields: Vec<Field> = config
            .fields
            .iter()
            .map(|f| Field {
                name: f.name.clone(),
                width: f.width,
                values: f.values.clone(),
            })
            .collect();

        let paradigms = config
            .paradigms
            .iter()
            .map(|p| Paradigm {
                name: p.name.clone(),
                heads: p.part_of_speech.clone(),
                slots: fields[1..]
                    .iter()
                    .map(|field| match p.slots.get(&field.name) {
                        Some(codes) => codes.chars().collect(),
                        None => vec![PLACEHOLDER],
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            name: config.metadata.name.clone(),
            description: config.metadata.description.clone(),
            width: config.width(),
            fields,
            paradigms,
        })
    }

    /// Parse and compile a TOML grammar
    pub fn from_toml_str(toml_str: &str, origin: &str) -> Result<Self> {
        let config: GrammarConfig = toml::from_str(toml_str)
            .map_err(|e| MorphtagError::resource(origin, format!("Failed to parse grammar: {e}")))?;
        Self::from_config(&config, origin)
    }

    /// Load a TOML grammar from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|e| MorphtagError::resource(&origin, e.to_string()))?;

        tracing::debug!(grammar = %origin, "loading grammar file");
        Self::from_toml_str(&content, &origin)
    }

    /// Grammar name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tag width in characters
    pub fn width(&self) -> usize {
        self.width
    }

    /// Fields in positional order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Paradigms in declaration order
    pub fn paradigms(&self) -> &[Paradigm] {
        &self.paradigms
    }

    /// Number of tags [`generate`](TagAnalyzer::generate) yields, duplicates included
    pub fn tag_count(&self) -> usize {
        self.paradigms
            .iter()
            .map(Paradigm::tag_count)
            .fold(0, usize::saturating_add)
    }

    /// Lazy enumeration of every generated tag
    pub fn iter(&self) -> TagIter<'_> {
        TagIter::new(self)
    }

    fn bundle(&self, paradigm: &Paradigm, head: &str, rest: &[char]) -> FeatureBundle {
        let mut bundle = FeatureBundle::new(paradigm.name.clone());
        let lead = &self.fields[0];
        bundle.push(lead.name.clone(), lead.values[head].clone());

        for (field, &ch) in self.fields[1..].iter().zip(rest) {
            if ch == PLACEHOLDER {
                continue;
            }
            if let Some(value) = field.value_name(ch.encode_utf8(&mut [0; 4])) {
                bundle.push(field.name.clone(), value);
            }
        }

        bundle
    }
}

impl TagAnalyzer for PositionalGrammar {
    fn analyze(&self, tag: &str) -> Vec<FeatureBundle> {
        let chars: Vec<char> = tag.chars().collect();
        if chars.len() != self.width {
            return Vec::new();
        }

        let (head, rest) = chars.split_at(self.fields[0].width);
        let head: String = head.iter().collect();

        self.paradigms
            .iter()
            .filter(|p| p.admits(&head, rest.iter().copied()))
            .map(|p| self.bundle(p, &head, rest))
            .collect()
    }

    fn generate(&self) -> Box<dyn Iterator<Item = Tag> + Send + '_> {
        Box::new(self.iter())
    }

    fn accepts(&self, tag: &str) -> bool {
        if tag.chars().count() != self.width {
            return false;
        }

        let split = tag
            .char_indices()
            .nth(self.fields[0].width)
            .map_or(tag.len(), |(i, _)| i);
        let (head, rest) = tag.split_at(split);

        self.paradigms.iter().any(|p| p.admits(head, rest.chars()))
    }
}

/// Odometer over the paradigms of a grammar
#[derive(Debug, Clone)]
pub struct TagIter<'a> {
    grammar: &'a PositionalGrammar,
    paradigm: usize,
    head: usize,
    odometer: Vec<usize>,
}

impl<'a> TagIter<'a> {
    fn new(grammar: &'a PositionalGrammar) -> Self {
        Self {
            grammar,
            paradigm: 0,
            head: 0,
            odometer: vec![0; grammar.fields.len().saturating_sub(1)],
        }
    }

    fn advance(&mut self, paradigm: &Paradigm) {
        for (i, slot) in paradigm.slots.iter().enumerate().rev() {
            self.odometer[i] += 1;
            if self.odometer[i] < slot.len() {
                return;
            }
            self.odometer[i] = 0;
        }
        self.head += 1;
    }
}

impl Iterator for TagIter<'_> {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        let grammar = self.grammar;

        loop {
            let paradigm = grammar.paradigms.get(self.paradigm)?;

            if let Some(head) = paradigm.heads.get(self.head) {
                let mut tag = String::with_capacity(grammar.width);
                tag.push_str(head);
                for (slot, &i) in paradigm.slots.iter().zip(&self.odometer) {
                    tag.push(slot[i]);
                }
                self.advance(paradigm);
                return Some(Tag::new(tag));
            }

            self.paradigm += 1;
            self.head = 0;
        }
    }
}
