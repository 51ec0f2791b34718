//! Catalog validation module.
//!
//! Checks that every registered language can resolve every key before the
//! first report is rendered, so an incomplete table fails at startup rather
//! than halfway through a report.

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings, TranslationKey};
use crate::shapes::ShapeKind;
use tracing::warn;

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the catalog unusable (missing strings)
    pub errors: Vec<String>,

    /// Suspicious but usable entries (e.g. singular equal to plural)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the translation catalog.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate every language in the global registry.
    pub fn validate_all() -> ValidationReport {
        let mut report = ValidationReport::new();
        for config in LanguageRegistry::get().list_all() {
            report.merge(Self::validate_language(config));
        }
        report
    }

    /// Validate a single language configuration.
    pub fn validate_language(config: &LanguageConfig) -> ValidationReport {
        Self::validate_strings(config.code, config.strings)
    }

    /// Validate a string table.
    ///
    /// This function checks that:
    /// - every key resolves to a non-empty string
    /// - every shape kind has distinct singular and plural names
    pub fn validate_strings(code: &str, strings: &LanguageStrings) -> ValidationReport {
        let mut report = ValidationReport::new();

        for key in TranslationKey::ALL {
            if strings.raw(key).trim().is_empty() {
                warn!(language = code, key = key.as_str(), "Missing translation");
                report
                    .errors
                    .push(format!("[{}] missing translation for '{}'", code, key.as_str()));
            }
        }

        for kind in ShapeKind::ALL {
            let (singular, plural) = kind.name_keys();
            let singular_text = strings.raw(singular);
            if !singular_text.is_empty() && singular_text == strings.raw(plural) {
                report.warnings.push(format!(
                    "[{}] '{}' and '{}' are both \"{}\"",
                    code,
                    singular.as_str(),
                    plural.as_str(),
                    singular_text
                ));
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::strings::ENGLISH_STRINGS;

    #[test]
    fn test_registered_catalog_is_clean() {
        let report = CatalogValidator::validate_all();
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_missing_string_is_error() {
        let incomplete = LanguageStrings {
            shapes_report_header: "",
            total: "   ",
            ..ENGLISH_STRINGS
        };

        let report = CatalogValidator::validate_strings("en", &incomplete);
        assert!(report.has_errors());
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors.iter().any(|e| e.contains("ShapesReportHeader")));
        assert!(report.errors.iter().any(|e| e.contains("'Total'")));
    }

    #[test]
    fn test_singular_equal_to_plural_is_warning() {
        let table = LanguageStrings {
            trapezoid_plural: "Trapezoid",
            ..ENGLISH_STRINGS
        };

        let report = CatalogValidator::validate_strings("en", &table);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("TrapezoidSingular"));
    }

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }
}
