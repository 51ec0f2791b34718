//! Errors raised by the translation catalog.

use thiserror::Error;

/// Failure to resolve a localized string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// The language selector is not one of the registered languages.
    #[error("Unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    /// A registered language has no text for a key. This is a catalog
    /// defect, not an input error.
    #[error("Missing translation for key '{key}' in language '{language}'")]
    MissingTranslationKey {
        key: &'static str,
        language: &'static str,
    },
}
