//! Public façade over grammar, constraints and tag-space cache
//!
//! Validators are normally constructed explicitly and passed around. For
//! callers that want a single shared instance, [`MorphtagValidator::global`]
//! lazily builds one per process.

use crate::analysis::FeatureBundle;
use crate::analyzer::{loader, PositionalGrammar, TagAnalyzer};
use crate::cache::{TagSpace, TagSpaceCache};
use crate::constraint::ConstraintEngine;
use crate::error::{MorphtagError, Result};
use crate::language::LanguageKey;
use crate::tables::FeatureCategory;
use std::sync::{Arc, OnceLock};

/// Outcome of checking a tag against grammar and language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagCheck {
    /// Structurally valid and admissible
    Valid,
    /// Not accepted by the grammar
    Rejected,
    /// Accepted by the grammar but expresses forbidden features
    Forbidden(Vec<FeatureCategory>),
}

impl TagCheck {
    /// Whether the tag is valid
    pub fn is_valid(&self) -> bool {
        matches!(self, TagCheck::Valid)
    }
}

/// Validates tags, analyses them and serves cached tag spaces
#[derive(Debug)]
pub struct MorphtagValidator<A: TagAnalyzer = PositionalGrammar> {
    analyzer: A,
    engine: ConstraintEngine,
    cache: TagSpaceCache,
}

static GLOBAL: OnceLock<Result<MorphtagValidator>> = OnceLock::new();

impl MorphtagValidator {
    /// Validator over the built-in grammar
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(loader::builtin()?))
    }

    /// The process-wide validator
    ///
    /// Built on first use from the grammar named by `MORPHTAG_GRAMMAR`, or
    /// the built-in grammar. An initialisation failure is permanent.
    pub fn global() -> Result<&'static MorphtagValidator> {
        GLOBAL
            .get_or_init(|| {
                let validator = loader::from_env().map(MorphtagValidator::new);
                if let Err(e) = &validator {
                    tracing::error!(error = %e, "failed to initialise morphtag validator");
                }
                validator
            })
            .as_ref()
            .map_err(|e| e.clone())
    }
}

impl<A: TagAnalyzer> MorphtagValidator<A> {
    /// Create a validator over `analyzer`
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            engine: ConstraintEngine::new(),
            cache: TagSpaceCache::new(),
        }
    }

    /// The underlying analyzer
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// The constraint engine
    pub fn engine(&self) -> &ConstraintEngine {
        &self.engine
    }

    /// The tag-space cache
    pub fn cache(&self) -> &TagSpaceCache {
        &self.cache
    }

    /// Whether `tag` is accepted by the grammar and, if a language is
    /// given, admissible in it
    pub fn is_valid(&self, tag: &str, language: Option<&LanguageKey>) -> bool {
        self.analyzer.accepts(tag) && self.engine.is_admissible(tag, language)
    }

    /// Check `tag` and say why it fails
    pub fn check(&self, tag: &str, language: Option<&LanguageKey>) -> TagCheck {
        if !self.analyzer.accepts(tag) {
            return TagCheck::Rejected;
        }

        let violations = self.engine.violations(tag, language);
        if violations.is_empty() {
            TagCheck::Valid
        } else {
            TagCheck::Forbidden(violations)
        }
    }

    /// The canonical analysis of `tag`
    pub fn to_features(&self, tag: &str) -> Result<FeatureBundle> {
        self.analyzer
            .accepts_and_analyze(tag)?
            .ok_or_else(|| MorphtagError::NoAnalysis {
                tag: tag.to_string(),
            })
    }

    /// All valid tags for `language`, computed once per language
    pub fn tag_space(&self, language: Option<&LanguageKey>) -> Arc<TagSpace> {
        self.cache.tag_space(&self.analyzer, &self.engine, language)
    }
}

/// [`MorphtagValidator::is_valid`] on the process-wide validator
pub fn is_valid(tag: &str, language: Option<&LanguageKey>) -> Result<bool> {
    Ok(MorphtagValidator::global()?.is_valid(tag, language))
}

/// [`MorphtagValidator::to_features`] on the process-wide validator
pub fn to_features(tag: &str) -> Result<FeatureBundle> {
    MorphtagValidator::global()?.to_features(tag)
}

/// [`MorphtagValidator::tag_space`] on the process-wide validator
pub fn tag_space(language: Option<&LanguageKey>) -> Result<Arc<TagSpace>> {
    Ok(MorphtagValidator::global()?.tag_space(language))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> MorphtagValidator {
        MorphtagValidator::builtin().unwrap()
    }

    #[test]
    fn test_structural_rejection_short_circuits() {
        let v = validator();
        assert!(!v.is_valid("not-a-tag", Some(&LanguageKey::Latin)));
        assert!(!v.is_valid("not-a-tag", None));
        assert_eq!(v.check("not-a-tag", Some(&LanguageKey::Latin)), TagCheck::Rejected);
    }

    #[test]
    fn test_valid_without_language() {
        let v = validator();
        assert!(v.is_valid("V-3saia-----", None));
        assert!(v.is_valid("S--s---mn---", None));
    }

    #[test]
    fn test_language_restrictions() {
        let v = validator();
        let la = LanguageKey::Latin;
        let grc = LanguageKey::AncientGreek;

        assert!(!v.is_valid("V-3saia-----", Some(&la)));
        assert!(v.is_valid("V-3saia-----", Some(&grc)));
        assert!(!v.is_valid("S--s---mn---", Some(&la)));
        assert!(v.is_valid("S--s---mn---", Some(&grc)));
        assert_eq!(
            v.check("V-3saia-----", Some(&la)),
            TagCheck::Forbidden(vec![FeatureCategory::Aorist])
        );
    }

    #[test]
    fn test_to_features() {
        let v = validator();
        let bundle = v.to_features("A--s---mnp--").unwrap();
        assert_eq!(bundle.paradigm, "adjective");
        assert_eq!(bundle.get("part_of_speech"), Some("adjective"));
        assert_eq!(bundle.get("number"), Some("singular"));
        assert_eq!(bundle.get("gender"), Some("masculine"));
        assert_eq!(bundle.get("case"), Some("nominative"));
        assert_eq!(bundle.get("degree"), Some("positive"));
        assert_eq!(bundle.get("strength"), None);
    }

    #[test]
    fn test_to_features_rejected_tag() {
        let v = validator();
        assert_eq!(
            v.to_features("not-a-tag"),
            Err(MorphtagError::NoAnalysis {
                tag: "not-a-tag".to_string()
            })
        );
    }

    #[test]
    fn test_global_instance() {
        let a = MorphtagValidator::global().unwrap();
        let b = MorphtagValidator::global().unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(is_valid("Nb-s---fn---", Some(&LanguageKey::Latin)), Ok(true));
        assert!(to_features("Nb-s---fn---").is_ok());
    }
}
