//! Catalog loading - reads YAML or TOML and resolves defaults

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::CatalogError;
use super::types::{Catalog, CatalogFile, CheckSpec, Expectation, Group};
use super::validation::validate;
use crate::utils::single_line;

/// File names tried, in order, when no catalog path is given
pub const CATALOG_FILE_NAMES: &[&str] = &["buildgate.yaml", "buildgate.yml", "buildgate.toml"];

/// Catalog serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Toml,
}

impl CatalogFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(CatalogFormat::Yaml),
            "toml" => Some(CatalogFormat::Toml),
            _ => None,
        }
    }
}

/// A catalog together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub source_path: PathBuf,
    /// The `base` field as written, if any
    pub declared_base: Option<PathBuf>,
}

impl LoadedCatalog {
    /// Directory containing the catalog file
    pub fn catalog_dir(&self) -> PathBuf {
        match self.source_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Base directory implied by the catalog alone
    ///
    /// The declared `base` is relative to the catalog file; without one the
    /// catalog's own directory is used.
    pub fn default_base(&self) -> PathBuf {
        let dir = self.catalog_dir();
        match &self.declared_base {
            Some(base) => dir.join(base),
            None => dir,
        }
    }
}

/// Find the first conventional catalog file in `dir`
pub fn discover_catalog(dir: &Path) -> Result<PathBuf, CatalogError> {
    CATALOG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| {
            CatalogError::NotFound(CATALOG_FILE_NAMES.iter().map(|s| s.to_string()).collect())
        })
}

/// Read, parse, validate and resolve a catalog file
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog, CatalogError> {
    let format = CatalogFormat::from_path(path).ok_or_else(|| CatalogError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let file = parse_catalog_str(&content, format)?;
    let declared_base = file.base.clone();

    let fallback_name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("catalog")
        .to_string();
    let catalog = resolve(file, &fallback_name);

    debug!(
        path = %path.display(),
        groups = catalog.groups.len(),
        expectations = catalog.expectation_count(),
        "loaded catalog"
    );

    Ok(LoadedCatalog {
        catalog,
        source_path: path.to_path_buf(),
        declared_base,
    })
}

/// Parse and validate catalog content (for use without the file system)
pub fn parse_catalog_str(content: &str, format: CatalogFormat) -> Result<CatalogFile, CatalogError> {
    let file: CatalogFile = match format {
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        CatalogFormat::Toml => toml::from_str(content)?,
    };

    validate(&file).map_err(CatalogError::Invalid)?;

    Ok(file)
}

impl CatalogFile {
    /// Resolve defaults into an immutable `Catalog`
    ///
    /// Assumes the document has passed `validate`.
    pub fn into_catalog(self, fallback_name: &str) -> Catalog {
        resolve(self, fallback_name)
    }
}

fn resolve(file: CatalogFile, fallback_name: &str) -> Catalog {
    let default_manifest = file.manifest.unwrap_or_default();

    let groups = file
        .groups
        .into_iter()
        .map(|group| Group {
            name: group.name,
            expectations: group
                .checks
                .into_iter()
                .map(|check| resolve_check(check, &default_manifest))
                .collect(),
        })
        .collect();

    Catalog {
        name: file.name.unwrap_or_else(|| fallback_name.to_string()),
        groups,
        next_steps: file.next_steps,
        build: file.build.as_ref().map(|b| b.to_step()),
    }
}

fn resolve_check(check: CheckSpec, default_manifest: &Path) -> Expectation {
    match check {
        CheckSpec::Artifact { label, path } => {
            let label =
                label.unwrap_or_else(|| single_line(&path.display().to_string()).into_owned());
            Expectation::artifact(label, path)
        }
        CheckSpec::Manifest {
            label,
            manifest,
            contains,
        } => {
            let manifest = manifest
                .filter(|m| !m.as_os_str().is_empty())
                .unwrap_or_else(|| default_manifest.to_path_buf());
            let label = label.unwrap_or_else(|| single_line(&contains).into_owned());
            Expectation::declaration(label, manifest, contains)
        }
    }
}
