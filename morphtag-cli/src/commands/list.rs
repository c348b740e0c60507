//! List command implementation

use anyhow::Result;
use morphtag_core::{ConstraintEngine, FeatureCategory, LanguageKey};
use std::io::{self, Write};

/// Print the known languages with their forbidden categories
pub fn languages<W: Write>(mut writer: W) -> Result<()> {
    let engine = ConstraintEngine::new();

    writeln!(writer, "Known languages:")?;
    for language in LanguageKey::KNOWN.iter() {
        let names: Vec<&str> = engine
            .blacklist(language)
            .iter()
            .map(|c| c.name())
            .collect();
        writeln!(
            writer,
            "  {:<4} {:<22} {}",
            language.code(),
            language.name(),
            names.join(" ")
        )?;
    }
    writeln!(writer, "Other language codes carry no restrictions.")?;
    Ok(())
}

/// Print the feature categories with their positional patterns
pub fn categories<W: Write>(mut writer: W) -> Result<()> {
    writeln!(writer, "Feature categories:")?;
    for category in FeatureCategory::ALL.iter() {
        writeln!(writer, "  {:<12} {}", category.name(), category.pattern())?;
    }
    Ok(())
}

/// Print the known languages to stdout
pub fn print_languages() -> Result<()> {
    languages(io::stdout().lock())
}

/// Print the feature categories to stdout
pub fn print_categories() -> Result<()> {
    categories(io::stdout().lock())
}
