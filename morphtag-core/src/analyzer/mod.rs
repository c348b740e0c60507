//! Structural tag analysis
//!
//! The constraint engine only needs two things from a grammar: the analyses
//! of a tag and the list of every tag the grammar can produce. Both are
//! exposed through [`TagAnalyzer`]. [`PositionalGrammar`] is the table-driven
//! implementation shipped with the crate.

pub mod config;
pub mod grammar;
pub mod loader;

pub use config::GrammarConfig;
pub use grammar::{PositionalGrammar, TagIter};
pub use loader::builtin;

use crate::analysis::FeatureBundle;
use crate::error::{MorphtagError, Result};
use crate::tag::Tag;

/// A grammar that accepts, analyses and enumerates tags
pub trait TagAnalyzer: Send + Sync {
    /// Every analysis the grammar yields for `tag`; empty when rejected
    fn analyze(&self, tag: &str) -> Vec<FeatureBundle>;

    /// Every structurally valid tag
    ///
    /// The sequence is finite and each call starts afresh. No order is
    /// guaranteed and a tag may be produced more than once.
    fn generate(&self) -> Box<dyn Iterator<Item = Tag> + Send + '_>;

    /// Whether the grammar accepts `tag`
    fn accepts(&self, tag: &str) -> bool {
        !self.analyze(tag).is_empty()
    }

    /// The single canonical analysis of `tag`
    ///
    /// Returns `Ok(None)` when the tag is rejected. More than one analysis
    /// breaks the grammar contract and is an error.
    fn accepts_and_analyze(&self, tag: &str) -> Result<Option<FeatureBundle>> {
        let mut analyses = self.analyze(tag);

        match analyses.len() {
            0 => Ok(None),
            1 => Ok(analyses.pop()),
            count => {
                tracing::warn!(tag, count, "grammar produced multiple analyses");
                Err(MorphtagError::AmbiguousAnalysis {
                    tag: tag.to_string(),
                    count,
                })
            }
        }
    }
}

impl<T: TagAnalyzer + ?Sized> TagAnalyzer for std::sync::Arc<T> {
    fn analyze(&self, tag: &str) -> Vec<FeatureBundle> {
        (**self).analyze(tag)
    }

    fn generate(&self) -> Box<dyn Iterator<Item = Tag> + Send + '_> {
        (**self).generate()
    }

    fn accepts(&self, tag: &str) -> bool {
        (**self).accepts(tag)
    }
}
