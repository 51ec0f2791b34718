//! Host flow shared by the binary and the integration tests.

use crate::config::Config;
use crate::i18n::CatalogValidator;
use crate::report::render;
use crate::shapes::Shape;
use anyhow::{bail, Context, Result};
use std::io::Read;
use tracing::{info, warn};

/// Refuse to render with an incomplete catalog.
pub fn check_catalog() -> Result<()> {
    let validation = CatalogValidator::validate_all();
    for warning in &validation.warnings {
        warn!("Catalog warning: {}", warning);
    }
    if validation.has_errors() {
        bail!(
            "Translation catalog is incomplete: {}",
            validation.errors.join("; ")
        );
    }
    Ok(())
}

/// Read the shape list from the configured file, or from `stdin` if none.
pub fn read_shapes(config: &Config, mut stdin: impl Read) -> Result<Vec<Shape>> {
    let input = match &config.shapes_file {
        Some(path) => {
            info!("Reading shapes from {}", path);
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read shapes file {}", path))?
        }
        None => {
            info!("Reading shapes from stdin");
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .context("Failed to read shapes from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&input).context("Failed to parse shapes JSON")
}

/// Validate the catalog, load the shapes and render the report.
pub fn run(config: &Config, stdin: impl Read) -> Result<String> {
    check_catalog()?;

    let shapes = read_shapes(config, stdin)?;
    info!(
        "Rendering report for {} shapes in {}",
        shapes.len(),
        config.language
    );

    render(&shapes, config.language).context("Failed to render shape report")
}
