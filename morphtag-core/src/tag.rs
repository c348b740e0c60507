//! Positional morphological tags
//!
//! A tag is kept exactly as written. Offsets are character offsets counted
//! from zero, so a tag that is too short simply has nothing at the higher
//! offsets.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Marker for a position that carries no value
pub const PLACEHOLDER: char = '-';

/// An immutable morphological tag
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Wrap a tag string without any normalisation
    pub fn new(tag: impl Into<String>) -> Self {
        Tag(tag.into())
    }

    /// The tag as written
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }

    /// Character at `offset`, if the tag is long enough
    #[inline]
    pub fn char_at(&self, offset: usize) -> Option<char> {
        char_at(&self.0, offset)
    }

    /// Consume the tag and return the owned string
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Character at `offset` of an arbitrary tag string
#[inline]
pub fn char_at(tag: &str, offset: usize) -> Option<char> {
    tag.chars().nth(offset)
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(tag: &str) -> Self {
        Tag(tag.to_string())
    }
}

impl From<String> for Tag {
    fn from(tag: String) -> Self {
        Tag(tag)
    }
}
