use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::catalog::{discover_catalog, load_catalog, LoadedCatalog};

/// Use the given catalog path, or look for a conventional one in the
/// current directory
pub fn locate_catalog(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Ok(discover_catalog(&cwd)?)
        }
    }
}

/// Locate and load a catalog
pub fn load(explicit: Option<&Path>) -> Result<LoadedCatalog> {
    let path = locate_catalog(explicit)?;
    load_catalog(&path).with_context(|| format!("Failed to load catalog: {}", path.display()))
}
