//! Shared fixtures for end-to-end tests

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Command for the compiled binary, colors disabled
pub fn buildgate() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_buildgate"));
    cmd.arg("--no-color").env_remove("BUILDGATE_LOG");
    cmd
}

/// Run `buildgate check` with the catalog at `catalog`
pub fn run_check(catalog: &Path, extra: &[&str]) -> Output {
    buildgate()
        .arg("check")
        .arg("--catalog")
        .arg(catalog)
        .args(extra)
        .output()
        .expect("Failed to run buildgate")
}

/// Write `content` to `rel` under `root`, creating parent directories
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("path has a parent"))
        .expect("Failed to create parent directories");
    fs::write(path, content).expect("Failed to write file");
}

/// A temporary project containing the given catalog as buildgate.yaml
pub fn project_with_catalog(catalog: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_file(dir.path(), "buildgate.yaml", catalog);
    dir
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
