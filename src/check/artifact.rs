//! Artifact presence check

use std::path::Path;

/// Check whether a filesystem entry exists at `path`.
///
/// Files and directories both count. Anything that cannot be stat'ed
/// (missing, dangling symlink, unreadable parent) is reported as absent:
/// a missing artifact is an expected outcome, not a fault.
pub fn artifact_exists(path: &Path) -> bool {
    path.exists()
}
