//! Process-wide validator initialisation
//!
//! Runs in its own test binary so the global instance starts unset. Keep a
//! single test here: the environment is process-wide.

use morphtag_core::analyzer::loader::GRAMMAR_ENV;
use morphtag_core::{LanguageKey, MorphtagError, MorphtagValidator};
use std::env;

#[test]
fn test_initialisation_failure_is_permanent() {
    let missing = "/nonexistent/morphtag/grammar.toml";
    env::set_var(GRAMMAR_ENV, missing);

    let first = MorphtagValidator::global().unwrap_err();
    assert!(matches!(
        &first,
        MorphtagError::ResourceInitialization { origin, .. } if origin == missing
    ));

    let second = MorphtagValidator::global().unwrap_err();
    assert_eq!(first, second);

    // The failure outlives the cause
    env::remove_var(GRAMMAR_ENV);
    assert_eq!(MorphtagValidator::global().unwrap_err(), first);

    assert_eq!(
        morphtag_core::is_valid("Nb-s---fn---", Some(&LanguageKey::Latin)),
        Err(first.clone())
    );
    assert_eq!(morphtag_core::to_features("Nb-s---fn---"), Err(first.clone()));
    assert!(morphtag_core::tag_space(None).is_err());
}
