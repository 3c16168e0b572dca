//! Localization collaborator.
//!
//! Display strings are authored in one language and translated on demand.
//! Translation may fail; callers then show the untranslated text.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::TranslationError;

/// Translates display text into a target language.
pub trait Translator: Send + Sync {
    /// Translate `text` into `target_language`.
    ///
    /// # Errors
    ///
    /// Returns `TranslationError` if no translation is available.
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError>;

    /// Translate `text`, falling back to the source text on failure.
    fn translate_or_keep(&self, text: &str, target_language: &str) -> String {
        match self.translate(text, target_language) {
            Ok(translated) => translated,
            Err(e) => {
                tracing::debug!(error = %e, "using untranslated text");
                text.to_owned()
            }
        }
    }
}

/// A translator backed by per-language lookup tables, typically loaded from
/// the `translations` section of a story manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CatalogTranslator {
    tables: HashMap<String, HashMap<String, String>>,
}

impl CatalogTranslator {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one entry.
    pub fn insert(&mut self, language: &str, source: &str, translated: &str) {
        self.tables
            .entry(language.to_owned())
            .or_default()
            .insert(source.to_owned(), translated.to_owned());
    }

    /// Number of entries across all languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    /// Returns `true` if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError> {
        self.tables
            .get(target_language)
            .and_then(|table| table.get(text))
            .cloned()
            .ok_or_else(|| TranslationError::MissingEntry {
                language: target_language.to_owned(),
                text: text.to_owned(),
            })
    }
}

/// Native display name of a language code, as shown in the language picker.
/// Unknown codes display as themselves.
#[must_use]
pub fn language_display_name(code: &str) -> &str {
    match code {
        "de" => "Deutsch",
        "en" => "English",
        "es" => "Español",
        "fr" => "Français",
        "pt" => "Português",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_translates_known_entry() {
        // Arrange
        let mut catalog = CatalogTranslator::new();
        catalog.insert("pt", "New Game", "Iniciar Jogo");

        // Act
        let result = catalog.translate("New Game", "pt");

        // Assert
        assert_eq!(result.unwrap(), "Iniciar Jogo");
    }

    #[test]
    fn test_catalog_reports_missing_entry() {
        let catalog = CatalogTranslator::new();

        let result = catalog.translate("New Game", "fr");

        assert_eq!(
            result.unwrap_err(),
            TranslationError::MissingEntry {
                language: "fr".to_owned(),
                text: "New Game".to_owned(),
            }
        );
    }

    #[test]
    fn test_translate_or_keep_falls_back_to_source_text() {
        let mut catalog = CatalogTranslator::new();
        catalog.insert("pt", "Back", "Voltar Cena");

        assert_eq!(catalog.translate_or_keep("Back", "pt"), "Voltar Cena");
        assert_eq!(catalog.translate_or_keep("Back", "de"), "Back");
    }

    #[test]
    fn test_language_display_names() {
        assert_eq!(language_display_name("pt"), "Português");
        assert_eq!(language_display_name("de"), "Deutsch");
        assert_eq!(language_display_name("ja"), "ja");
    }
}
