//! Manifest declaration check

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The manifest could not be inspected at all.
///
/// Distinct from a declaration simply being absent: this usually points at
/// the environment or the catalog rather than at the build output.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Check whether the manifest at `path` contains `needle`.
///
/// The whole file is read as UTF-8 text and searched with exact,
/// case-sensitive containment. The markup structure of the document is
/// ignored. The file handle is released before this returns.
pub fn manifest_contains(path: &Path, needle: &str) -> Result<bool, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.contains(needle))
}
