use crate::i18n::Language;
use anyhow::{Context, Result};

pub const DEFAULT_LANGUAGE: &str = "es";

#[derive(Debug, Clone)]
pub struct Config {
    // Report
    pub language: Language,

    // Input (None reads the shape list from stdin)
    pub shapes_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let language_code =
            std::env::var("REPORT_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string());

        Ok(Self {
            language: Language::from_code(&language_code)
                .context("REPORT_LANGUAGE is not a supported language")?,
            shapes_file: std::env::var("SHAPES_FILE")
                .ok()
                .filter(|path| !path.trim().is_empty()),
        })
    }

    /// Apply command-line arguments: the first positional argument is the
    /// shapes file.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        if let Some(path) = args.into_iter().find(|arg| !arg.starts_with('-')) {
            self.shapes_file = Some(path);
        }
        self
    }
}
