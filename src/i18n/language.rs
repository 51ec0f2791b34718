//! Language type: validated language handle.
//!
//! A `Language` can only be obtained from the constants or from
//! `Language::from_code`, so holding one means its strings are registered.

use crate::i18n::{I18nError, LanguageConfig, LanguageRegistry, LanguageStrings, TranslationKey};

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    pub const SPANISH: Language = Language { code: "es" };
    pub const ENGLISH: Language = Language { code: "en" };
    pub const ITALIAN: Language = Language { code: "it" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err(I18nError::UnsupportedLanguage)` otherwise
    ///
    /// # Example
    /// ```
    /// use shape_report::i18n::Language;
    ///
    /// let italian = Language::from_code("it").unwrap();
    /// assert_eq!(italian, Language::ITALIAN);
    /// assert!(Language::from_code("fr").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| I18nError::UnsupportedLanguage(code.to_string()))
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> Result<&'static LanguageConfig, I18nError> {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .ok_or_else(|| I18nError::UnsupportedLanguage(self.code.to_string()))
    }

    /// Get the English name of the language (e.g., "Spanish").
    pub fn name(&self) -> Result<&'static str, I18nError> {
        Ok(self.config()?.name)
    }

    /// Get the native name of the language (e.g., "Español").
    pub fn native_name(&self) -> Result<&'static str, I18nError> {
        Ok(self.config()?.native_name)
    }

    /// Get the string table of this language.
    pub fn strings(&self) -> Result<&'static LanguageStrings, I18nError> {
        Ok(self.config()?.strings)
    }

    /// Resolve a key in this language.
    pub fn translate(&self, key: TranslationKey) -> Result<&'static str, I18nError> {
        self.strings()?.get(key, self.code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

impl std::str::FromStr for Language {
    type Err = I18nError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Language::from_code(code)
    }
}

/// Anything that can select a language: a `Language` or a raw code.
pub trait IntoLanguage {
    fn into_language(self) -> Result<Language, I18nError>;
}

impl IntoLanguage for Language {
    fn into_language(self) -> Result<Language, I18nError> {
        Ok(self)
    }
}

impl IntoLanguage for &str {
    fn into_language(self) -> Result<Language, I18nError> {
        Language::from_code(self)
    }
}

impl IntoLanguage for &String {
    fn into_language(self) -> Result<Language, I18nError> {
        Language::from_code(self)
    }
}

/// Resolve `key` in `language`.
///
/// Fails with `UnsupportedLanguage` for an unknown code and with
/// `MissingTranslationKey` if the language's table has no text for the key.
pub fn translate(
    key: TranslationKey,
    language: impl IntoLanguage,
) -> Result<&'static str, I18nError> {
    language.into_language()?.translate(key)
}
