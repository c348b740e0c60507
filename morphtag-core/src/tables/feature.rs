//! Positional feature patterns
//!
//! Each blacklistable feature is tied to the tag offset that the tag scheme
//! assigns to it. Matching only ever inspects that offset.

use crate::tag::{char_at, PLACEHOLDER};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A test on a single tag offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionalPattern {
    /// The offset holds exactly this character
    Equals {
        /// Character offset in the tag
        offset: usize,
        /// Required character
        value: char,
    },
    /// The offset holds one of these characters
    AnyOf {
        /// Character offset in the tag
        offset: usize,
        /// Admissible characters
        values: &'static [char],
    },
    /// The offset holds anything but the placeholder
    Committed {
        /// Character offset in the tag
        offset: usize,
    },
}

impl PositionalPattern {
    /// Offset inspected by this pattern
    pub fn offset(&self) -> usize {
        match *self {
            PositionalPattern::Equals { offset, .. }
            | PositionalPattern::AnyOf { offset, .. }
            | PositionalPattern::Committed { offset } => offset,
        }
    }

    /// Whether the tag matches. Tags too short for the offset never match.
    #[inline]
    pub fn matches(&self, tag: &str) -> bool {
        let Some(ch) = char_at(tag, self.offset()) else {
            return false;
        };

        match *self {
            PositionalPattern::Equals { value, .. } => ch == value,
            PositionalPattern::AnyOf { values, .. } => values.contains(&ch),
            PositionalPattern::Committed { .. } => ch != PLACEHOLDER,
        }
    }
}

impl fmt::Display for PositionalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionalPattern::Equals { offset, value } => write!(f, "[{offset}] = '{value}'"),
            PositionalPattern::AnyOf { offset, values } => {
                let set: String = values.iter().collect();
                write!(f, "[{offset}] in '{set}'")
            }
            PositionalPattern::Committed { offset } => {
                write!(f, "[{offset}] != '{PLACEHOLDER}'")
            }
        }
    }
}

/// A feature that a language may forbid outright
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    /// Article part of speech
    Art,
    /// Dual number
    Dual,
    /// Any committed gender
    Gender,
    /// Vocative case
    Voc,
    /// Ablative case
    Abl,
    /// Instrumental case
    Ins,
    /// Locative case
    Loc,
    /// Resultative tense
    Resultative,
    /// Past tense
    Past,
    /// Aorist tense
    Aorist,
    /// Optative mood
    Optative,
    /// Middle and middle-like voices
    Middle,
    /// Any committed animacy
    Animacy,
    /// Any committed strength (adjectival declension)
    Strength,
}

impl FeatureCategory {
    /// Every category, in table order
    pub const ALL: [FeatureCategory; 14] = [
        FeatureCategory::Art,
        FeatureCategory::Dual,
        FeatureCategory::Gender,
        FeatureCategory::Voc,
        FeatureCategory::Abl,
        FeatureCategory::Ins,
        FeatureCategory::Loc,
        FeatureCategory::Resultative,
        FeatureCategory::Past,
        FeatureCategory::Aorist,
        FeatureCategory::Optative,
        FeatureCategory::Middle,
        FeatureCategory::Animacy,
        FeatureCategory::Strength,
    ];

    /// The positional pattern that expresses this feature
    pub const fn pattern(self) -> PositionalPattern {
        use PositionalPattern::*;

        match self {
            FeatureCategory::Art => Equals { offset: 0, value: 'S' },
            FeatureCategory::Dual => Equals { offset: 3, value: 'd' },
            FeatureCategory::Gender => Committed { offset: 7 },
            FeatureCategory::Voc => Equals { offset: 8, value: 'v' },
            FeatureCategory::Abl => Equals { offset: 8, value: 'b' },
            FeatureCategory::Ins => Equals { offset: 8, value: 'i' },
            FeatureCategory::Loc => Equals { offset: 8, value: 'l' },
            FeatureCategory::Resultative => Equals { offset: 4, value: 's' },
            FeatureCategory::Past => Equals { offset: 4, value: 'u' },
            FeatureCategory::Aorist => Equals { offset: 4, value: 'a' },
            FeatureCategory::Optative => Equals { offset: 5, value: 'o' },
            FeatureCategory::Middle => AnyOf {
                offset: 6,
                values: &['e', 'm', 'n', 'd'],
            },
            FeatureCategory::Animacy => Committed { offset: 10 },
            FeatureCategory::Strength => Committed { offset: 11 },
        }
    }

    /// Whether `tag` expresses this feature
    #[inline]
    pub fn matches(self, tag: &str) -> bool {
        self.pattern().matches(tag)
    }

    /// Stable lower-case name
    pub fn name(self) -> &'static str {
        match self {
            FeatureCategory::Art => "art",
            FeatureCategory::Dual => "dual",
            FeatureCategory::Gender => "gender",
            FeatureCategory::Voc => "voc",
            FeatureCategory::Abl => "abl",
            FeatureCategory::Ins => "ins",
            FeatureCategory::Loc => "loc",
            FeatureCategory::Resultative => "resultative",
            FeatureCategory::Past => "past",
            FeatureCategory::Aorist => "aorist",
            FeatureCategory::Optative => "optative",
            FeatureCategory::Middle => "middle",
            FeatureCategory::Animacy => "animacy",
            FeatureCategory::Strength => "strength",
        }
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised feature category name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for FeatureCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureCategory::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
