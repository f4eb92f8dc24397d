use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

use super::common;
use crate::catalog::{Catalog, ExpectationKind};
use crate::utils::single_line;

/// Print the catalog without evaluating it
pub fn execute(catalog_path: Option<&Path>) -> Result<()> {
    let loaded = common::load(catalog_path)?;
    let stdout = io::stdout();
    write_catalog(&loaded.catalog, &mut stdout.lock()).context("Failed to write catalog")
}

pub fn write_catalog<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{} ({} groups, {} checks)",
        catalog.name.bold(),
        catalog.groups.len(),
        catalog.expectation_count()
    )?;

    for group in &catalog.groups {
        writeln!(out, "\n{}", group.name.bold())?;
        for expectation in &group.expectations {
            match &expectation.kind {
                ExpectationKind::Artifact { path } => writeln!(
                    out,
                    "  {} {}: {}",
                    "artifact".cyan(),
                    expectation.label,
                    single_line(&path.display().to_string())
                )?,
                ExpectationKind::Manifest { manifest, contains } => writeln!(
                    out,
                    "  {} {}: \"{}\" in {}",
                    "manifest".magenta(),
                    expectation.label,
                    single_line(contains),
                    single_line(&manifest.display().to_string())
                )?,
            }
        }
    }

    if let Some(build) = &catalog.build {
        writeln!(
            out,
            "\n{} {} (timeout {}s)",
            "build".yellow(),
            build.command,
            build.timeout.as_secs()
        )?;
    }

    Ok(())
}
