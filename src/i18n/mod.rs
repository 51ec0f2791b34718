//! Internationalization (i18n) module: the translation catalog.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their strings
//! - `language`: Validated `Language` handle and the `translate` lookup
//! - `strings`: Translation keys and the per-language string tables
//! - `validator`: Startup validation of the whole catalog
//! - `error`: Lookup errors
//!
//! # Example
//!
//! ```
//! use shape_report::i18n::{translate, Language, TranslationKey};
//!
//! assert_eq!(translate(TranslationKey::SquarePlural, Language::ENGLISH).unwrap(), "Squares");
//! assert_eq!(translate(TranslationKey::SquarePlural, "es").unwrap(), "Cuadrados");
//! ```

mod error;
mod language;
mod registry;
pub(crate) mod strings;
mod validator;

pub use error::I18nError;
pub use language::{translate, IntoLanguage, Language};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, TranslationKey};
pub use validator::{CatalogValidator, ValidationReport};
