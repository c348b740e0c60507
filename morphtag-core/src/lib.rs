//! Validation and enumeration of positional morphological tags
//!
//! A morphtag is a fixed-width string whose character positions each encode
//! one grammatical feature (part of speech, number, tense, case, ...). A tag
//! is valid when a grammar accepts it and, for a given language, when it
//! expresses none of the features that language lacks. Latin has no dual,
//! Gothic no instrumental, and so on.
//!
//! # Architecture
//!
//! - [`analyzer`]: the structural side. [`TagAnalyzer`] accepts, analyses and
//!   enumerates tags; [`PositionalGrammar`] is a table-driven implementation
//!   loaded from TOML.
//! - [`tables`]: positional feature patterns and per-language blacklists.
//! - [`ConstraintEngine`]: applies a language's blacklist to a tag.
//! - [`TagSpaceCache`]: computes each language's tag space once.
//! - [`MorphtagValidator`]: the façade tying these together.
//!
//! # Example
//!
//! ```rust
//! use morphtag_core::{LanguageKey, MorphtagValidator};
//!
//! let validator = MorphtagValidator::builtin().unwrap();
//!
//! // Aorist verb: fine in Greek, impossible in Latin
//! let tag = "V-3saia-----";
//! assert!(validator.is_valid(tag, Some(&LanguageKey::parse("grc"))));
//! assert!(!validator.is_valid(tag, Some(&LanguageKey::parse("la"))));
//!
//! let features = validator.to_features("A--s---mnp--").unwrap();
//! assert_eq!(features.get("case"), Some("nominative"));
//! ```

pub mod analysis;
pub mod analyzer;
pub mod cache;
pub mod constraint;
pub mod error;
pub mod language;
pub mod tables;
pub mod tag;
pub mod validator;

pub use analysis::{Feature, FeatureBundle};
pub use analyzer::{PositionalGrammar, TagAnalyzer};
pub use cache::{TagSpace, TagSpaceCache};
pub use constraint::ConstraintEngine;
pub use error::{MorphtagError, Result};
pub use language::{LanguageKey, UnknownLanguage};
pub use tables::{FeatureCategory, PositionalPattern};
pub use tag::{Tag, PLACEHOLDER};
pub use validator::{is_valid, tag_space, to_features, MorphtagValidator, TagCheck};
