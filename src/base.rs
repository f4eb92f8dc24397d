//! Base directory resolution
//!
//! Every relative path in a catalog is resolved against one directory that is
//! fixed before the first check runs, so results do not depend on where the
//! tool happens to be invoked from.

use std::io;
use std::path::{Path, PathBuf};

use crate::utils::display_path;

#[derive(Debug, thiserror::Error)]
pub enum BaseDirError {
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("base directory {} cannot be resolved: {source}", path.display())]
    Unresolvable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("base path {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
}

/// Canonical directory all relative catalog paths are joined onto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDir {
    root: PathBuf,
}

impl BaseDir {
    /// Resolve and canonicalize `path`, relative to the current directory
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, BaseDirError> {
        let path = path.as_ref();
        let root = path
            .canonicalize()
            .map_err(|source| BaseDirError::Unresolvable {
                path: path.to_path_buf(),
                source,
            })?;

        if !root.is_dir() {
            return Err(BaseDirError::NotADirectory { path: root });
        }

        Ok(Self { root })
    }

    /// Pick the base directory by precedence
    ///
    /// An explicit directory (the `--base` flag) wins, then the directory
    /// implied by the catalog file, then the current directory.
    pub fn resolve(
        explicit: Option<&Path>,
        catalog_default: Option<&Path>,
    ) -> Result<Self, BaseDirError> {
        match explicit.or(catalog_default) {
            Some(path) => Self::new(path),
            None => {
                let cwd = std::env::current_dir().map_err(BaseDirError::CurrentDir)?;
                Self::new(cwd)
            }
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a catalog path onto the base; absolute paths pass through
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Display a path relative to the base when it lives inside it
    pub fn display(&self, path: &Path) -> String {
        display_path(path, &self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_canonicalizes() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("android")).unwrap();

        let base = BaseDir::new(dir.path().join("android").join("..").join("android")).unwrap();

        assert_eq!(
            base.root(),
            dir.path().join("android").canonicalize().unwrap()
        );
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();

        let err = BaseDir::new(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, BaseDirError::Unresolvable { .. }));
    }

    #[test]
    fn test_file_is_not_a_base() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("build.gradle");
        fs::write(&file, "").unwrap();

        let err = BaseDir::new(&file).unwrap_err();
        assert!(matches!(err, BaseDirError::NotADirectory { .. }));
    }

    #[test]
    fn test_explicit_wins_over_catalog() {
        let explicit = TempDir::new().unwrap();
        let catalog = TempDir::new().unwrap();

        let base = BaseDir::resolve(Some(explicit.path()), Some(catalog.path())).unwrap();
        assert_eq!(base.root(), explicit.path().canonicalize().unwrap());

        let base = BaseDir::resolve(None, Some(catalog.path())).unwrap();
        assert_eq!(base.root(), catalog.path().canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_path() {
        let dir = TempDir::new().unwrap();
        let base = BaseDir::new(dir.path()).unwrap();

        assert_eq!(
            base.resolve_path(Path::new("app/src/main/AndroidManifest.xml")),
            base.root().join("app/src/main/AndroidManifest.xml")
        );
        let absolute = dir.path().canonicalize().unwrap().join("abs.txt");
        assert_eq!(base.resolve_path(&absolute), absolute);
    }

    #[test]
    fn test_display_relative_to_base() {
        let dir = TempDir::new().unwrap();
        let base = BaseDir::new(dir.path()).unwrap();

        let inside = base.resolve_path(Path::new("res/values/strings.xml"));
        assert_eq!(base.display(&inside), "res/values/strings.xml");
    }
}
