//! Codec for generated language files.
//!
//! A language file is a short header comment block followed by the translation
//! map as a flat TOML table, so the host application can load it like any other
//! TOML document. Rendering and parsing live together here to keep the file
//! format an explicit contract.

use toml::value::Table;

use crate::domain::{AppError, TranslationMap};

/// Render one language file: header comments plus the serialized translation map.
pub fn render(
    locale: &str,
    module: &str,
    timestamp: &str,
    translations: &TranslationMap,
) -> Result<String, AppError> {
    let body = toml::to_string(translations.as_table())?;
    Ok(format!("# {locale} translation for {module}\n# Last update at {timestamp}\n\n{body}"))
}

/// Parse a language file back into its translation map.
///
/// The header comments are skipped by the TOML parser. Every value must be a
/// string; anything else means the file was not produced by [`render`].
pub fn parse(text: &str) -> Result<TranslationMap, AppError> {
    let table: Table = toml::from_str(text)?;
    if let Some((source, value)) = table.iter().find(|(_, value)| !value.is_str()) {
        return Err(AppError::ParseError {
            what: "language file".to_string(),
            details: format!("value for '{}' is a {}, expected a string", source, value.type_str()),
        });
    }
    Ok(TranslationMap::from_table(table))
}
