use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::common;

/// Load and validate a catalog, reporting its size
///
/// Validation problems surface as the returned error.
pub fn execute(catalog_path: Option<&Path>) -> Result<()> {
    let loaded = common::load(catalog_path)?;

    println!(
        "{} Catalog valid: {} ({} groups, {} checks)",
        "✓".green().bold(),
        loaded.source_path.display(),
        loaded.catalog.groups.len(),
        loaded.catalog.expectation_count()
    );

    Ok(())
}
