//! Non-verification subcommands and fatal startup errors

use super::helpers::*;

const CATALOG: &str = r#"
version: 1
name: ui
groups:
  - name: Onboarding Flow
    checks:
      - type: artifact
        path: presentation/onboarding/OnboardingScreen.kt
  - name: Navigation
    checks:
      - type: manifest
        label: HomeScreen integrated
        manifest: presentation/navigation/NavGraph.kt
        contains: HomeScreen
"#;

#[test]
fn test_list_prints_catalog() {
    let project = project_with_catalog(CATALOG);

    let output = buildgate()
        .args(["list", "--catalog"])
        .arg(project.path().join("buildgate.yaml"))
        .output()
        .unwrap();
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("ui (2 groups, 2 checks)"));
    assert!(stdout.contains(
        "artifact presentation/onboarding/OnboardingScreen.kt: presentation/onboarding/OnboardingScreen.kt"
    ));
    assert!(stdout.contains("manifest HomeScreen integrated: \"HomeScreen\" in presentation/navigation/NavGraph.kt"));
}

#[test]
fn test_validate_accepts_good_catalog() {
    let project = project_with_catalog(CATALOG);

    let output = buildgate()
        .args(["validate", "--catalog"])
        .arg(project.path().join("buildgate.yaml"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Catalog valid"));
}

#[test]
fn test_invalid_catalog_is_fatal() {
    let project = project_with_catalog("version: 3\ngroups: []\n");

    let output = buildgate()
        .args(["validate", "--catalog"])
        .arg(project.path().join("buildgate.yaml"))
        .output()
        .unwrap();
    let stderr = stderr_of(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Unsupported version: 3"));
    assert!(stderr.contains("No groups defined"));
}

#[test]
fn test_missing_catalog_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = run_check(&dir.path().join("nope.yaml"), &[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to load catalog"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_no_catalog_in_directory_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = buildgate()
        .current_dir(dir.path())
        .arg("check")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("no catalog found"));
}

#[test]
fn test_unresolvable_base_is_fatal() {
    let project = project_with_catalog(CATALOG);
    let missing = project.path().join("missing-base");

    let output = run_check(
        &project.path().join("buildgate.yaml"),
        &["--base", missing.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to resolve base directory"));
}

#[test]
fn test_build_flag_without_build_section_is_fatal() {
    let project = project_with_catalog(CATALOG);

    let output = run_check(&project.path().join("buildgate.yaml"), &["--build"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("defines no build step"));
}

#[test]
fn test_completions_bash() {
    let output = buildgate().args(["completions", "bash"]).output().unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("buildgate"));
}
