//! Feature bundles produced by tag analysis

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// One named feature value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feature {
    /// Grammar field name, e.g. `case`
    pub name: String,
    /// Value name, e.g. `nominative`
    pub value: String,
}

/// A single decomposition of a tag into feature values
///
/// Only committed positions are listed, in positional order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureBundle {
    /// Name of the paradigm that accepted the tag
    pub paradigm: String,
    /// Feature values in positional order
    pub features: SmallVec<[Feature; 8]>,
}

impl FeatureBundle {
    /// Create an empty bundle for a paradigm
    pub fn new(paradigm: impl Into<String>) -> Self {
        Self {
            paradigm: paradigm.into(),
            features: SmallVec::new(),
        }
    }

    /// Append a feature value
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.features.push(Feature {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Value of the named feature
    pub fn get(&self, name: &str) -> Option<&str> {
        self.features
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Number of committed features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether no feature is committed
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterate over the features
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }
}

impl fmt::Display for FeatureBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.paradigm)?;
        for feature in &self.features {
            write!(f, " {}={}", feature.name, feature.value)?;
        }
        Ok(())
    }
}
