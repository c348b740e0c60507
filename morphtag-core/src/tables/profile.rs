//! Per-language blacklists
//!
//! Languages outside this table have no restrictions.

use super::feature::FeatureCategory::{self, *};
use crate::language::LanguageKey;

const LATIN: &[FeatureCategory] = &[
    Art,
    Dual,
    Ins,
    Aorist,
    Resultative,
    Past,
    Optative,
    Middle,
    Animacy,
    Strength,
];

const ANCIENT_GREEK: &[FeatureCategory] = &[
    Dual,
    Abl,
    Ins,
    Loc,
    Resultative,
    Past,
    Animacy,
    Strength,
];

const CLASSICAL_ARMENIAN: &[FeatureCategory] = &[
    Art,
    Dual,
    Gender,
    Voc,
    Abl,
    Ins,
    Resultative,
    Past,
    Optative,
    Middle,
    Animacy,
    Strength,
];

const GOTHIC: &[FeatureCategory] = &[
    Art,
    Voc,
    Abl,
    Ins,
    Loc,
    Aorist,
    Resultative,
    Optative,
    Middle,
    Animacy,
    Strength,
];

const OLD_CHURCH_SLAVONIC: &[FeatureCategory] = &[Art, Abl, Optative, Middle];

/// Categories forbidden in `language`
pub fn blacklist(language: &LanguageKey) -> &'static [FeatureCategory] {
    match language {
        LanguageKey::Latin => LATIN,
        LanguageKey::AncientGreek => ANCIENT_GREEK,
        LanguageKey::ClassicalArmenian => CLASSICAL_ARMENIAN,
        LanguageKey::Gothic => GOTHIC,
        LanguageKey::OldChurchSlavonic => OLD_CHURCH_SLAVONIC,
        LanguageKey::Other(_) => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_languages_have_blacklists() {
        for language in LanguageKey::KNOWN {
            assert!(!blacklist(&language).is_empty(), "{language}");
        }
    }

    #[test]
    fn test_unknown_language_is_unrestricted() {
        assert!(blacklist(&LanguageKey::parse("zz")).is_empty());
    }

    #[test]
    fn test_selected_entries() {
        assert!(blacklist(&LanguageKey::Latin).contains(&Aorist));
        assert!(!blacklist(&LanguageKey::AncientGreek).contains(&Aorist));
        assert!(blacklist(&LanguageKey::Gothic).contains(&Loc));
        assert!(!blacklist(&LanguageKey::Gothic).contains(&Dual));
        assert!(blacklist(&LanguageKey::ClassicalArmenian).contains(&Gender));
        assert_eq!(blacklist(&LanguageKey::OldChurchSlavonic).len(), 4);
    }

    #[test]
    fn test_no_duplicates() {
        for language in LanguageKey::KNOWN {
            let list = blacklist(&language);
            for (i, category) in list.iter().enumerate() {
                assert!(!list[i + 1..].contains(category), "{language}: {category}");
            }
        }
    }
}
