//! Grammar resource loader
//!
//! The built-in grammar is embedded at compile time and compiled once per
//! process.

use super::grammar::PositionalGrammar;
use crate::error::Result;
use std::sync::OnceLock;

/// Environment variable naming a grammar file to use instead of the built-in one
pub const GRAMMAR_ENV: &str = "MORPHTAG_GRAMMAR";

/// Source text of the built-in grammar
pub const BUILTIN_GRAMMAR: &str = include_str!("../../grammars/proiel.toml");

const BUILTIN_ORIGIN: &str = "built-in grammar";

static BUILTIN: OnceLock<Result<PositionalGrammar>> = OnceLock::new();

/// The built-in grammar
///
/// A failure to compile is remembered and returned on every call.
pub fn builtin() -> Result<PositionalGrammar> {
    BUILTIN
        .get_or_init(|| {
            tracing::debug!("compiling built-in grammar");
            PositionalGrammar::from_toml_str(BUILTIN_GRAMMAR, BUILTIN_ORIGIN)
        })
        .clone()
}

/// The grammar named by `MORPHTAG_GRAMMAR`, or the built-in one
pub fn from_env() -> Result<PositionalGrammar> {
    match std::env::var_os(GRAMMAR_ENV) {
        Some(path) if !path.is_empty() => PositionalGrammar::from_file(path),
        _ => builtin(),
    }
}
