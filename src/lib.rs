// Library exports for binaries and tests
pub mod app;
pub mod config;
pub mod i18n;
pub mod report;
pub mod shapes;

pub use i18n::{translate, I18nError, Language, TranslationKey};
pub use report::{format_decimal, render, ReportError, ReportLine, ReportTotals, ShapeReport};
pub use shapes::{Shape, ShapeError, ShapeKind};
