//! Language constraints on tags
//!
//! A tag is admissible for a language when none of the features that
//! language forbids is expressed by the tag.

use crate::language::LanguageKey;
use crate::tables::{blacklist, FeatureCategory};

/// Applies per-language blacklists to tags
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintEngine;

impl ConstraintEngine {
    /// Create an engine over the built-in tables
    pub const fn new() -> Self {
        ConstraintEngine
    }

    /// Categories forbidden for `language`
    pub fn blacklist(&self, language: &LanguageKey) -> &'static [FeatureCategory] {
        blacklist(language)
    }

    /// Whether `tag` respects the restrictions of `language`
    ///
    /// Without a language every tag is admissible; structural validity is
    /// the analyzer's concern.
    pub fn is_admissible(&self, tag: &str, language: Option<&LanguageKey>) -> bool {
        let Some(language) = language else {
            return true;
        };

        !blacklist(language)
            .iter()
            .any(|category| category.matches(tag))
    }

    /// Every forbidden category that `tag` expresses, in blacklist order
    pub fn violations(&self, tag: &str, language: Option<&LanguageKey>) -> Vec<FeatureCategory> {
        let Some(language) = language else {
            return Vec::new();
        };

        blacklist(language)
            .iter()
            .copied()
            .filter(|category| category.matches(tag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_language_admits_everything() {
        let engine = ConstraintEngine::new();
        assert!(engine.is_admissible("S--d-----v--", None));
        assert!(engine.is_admissible("not-a-tag", None));
        assert!(engine.violations("S--d-----v--", None).is_empty());
    }

    #[test]
    fn test_aorist_rejected_in_latin_independent_of_dual() {
        let engine = ConstraintEngine::new();
        let tag = "V-3saia-----";
        assert!(!FeatureCategory::Dual.matches(tag));
        assert!(!engine.is_admissible(tag, Some(&LanguageKey::Latin)));
        assert_eq!(
            engine.violations(tag, Some(&LanguageKey::Latin)),
            vec![FeatureCategory::Aorist]
        );
        assert!(engine.is_admissible(tag, Some(&LanguageKey::AncientGreek)));
    }

    #[test]
    fn test_multiple_violations_reported() {
        let engine = ConstraintEngine::new();
        // dual, instrumental and strong declension
        let tag = "A--d---mip-s";
        let violations = engine.violations(tag, Some(&LanguageKey::Latin));
        assert_eq!(
            violations,
            vec![
                FeatureCategory::Dual,
                FeatureCategory::Ins,
                FeatureCategory::Strength
            ]
        );
        assert!(!engine.is_admissible(tag, Some(&LanguageKey::Latin)));
    }

    #[test]
    fn test_unknown_language_has_no_restrictions() {
        let engine = ConstraintEngine::new();
        let zz = LanguageKey::parse("zz");
        assert!(engine.is_admissible("S--d-----v--", Some(&zz)));
        assert!(engine.blacklist(&zz).is_empty());
    }

    #[test]
    fn test_admissible_matches_violations() {
        let engine = ConstraintEngine::new();
        let tags = [
            "Nb-s---fn---",
            "Nb-d---fn---",
            "V-3saia-----",
            "V-3spoe-----",
            "S--s---mn---",
            "A--p---nbs-w",
            "Pp1s----l---",
        ];
        for language in LanguageKey::KNOWN {
            for tag in tags {
                assert_eq!(
                    engine.is_admissible(tag, Some(&language)),
                    engine.violations(tag, Some(&language)).is_empty(),
                    "{tag} in {language}"
                );
            }
        }
    }
}
