//! Test translators.

use vnengine_core::error::TranslationError;
use vnengine_core::translation::Translator;

/// A translator whose service is always unavailable. Useful for checking the
/// untranslated-text fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingTranslator;

impl Translator for FailingTranslator {
    fn translate(&self, _text: &str, _target_language: &str) -> Result<String, TranslationError> {
        Err(TranslationError::Unavailable("connection refused".into()))
    }
}
