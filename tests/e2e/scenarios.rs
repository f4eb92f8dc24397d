//! Verification scenarios: exit status and report lines

use super::helpers::*;

const SINGLE_ARTIFACT: &str = r#"
version: 1
name: scenario
groups:
  - name: Docs
    checks:
      - type: artifact
        label: Readme
        path: README.md
"#;

const MANIFEST_CATALOG: &str = r#"
version: 1
name: manifest
manifest: app/src/main/AndroidManifest.xml
groups:
  - name: Manifest Verification
    checks:
      - type: manifest
        label: Foreground Service Permission
        contains: FOREGROUND_SERVICE
      - type: manifest
        label: Camera Permission
        contains: CAMERA_PERMISSION
"#;

#[test]
fn test_scenario_a_present_artifact_exits_zero() {
    let project = project_with_catalog(SINGLE_ARTIFACT);
    write_file(project.path(), "README.md", "# ScreenRest\n");

    let output = run_check(&project.path().join("buildgate.yaml"), &[]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout:\n{stdout}");
    assert!(stdout.contains("  ✓ Readme: README.md"));
    assert!(stdout.contains("ALL CHECKS PASSED"));
}

#[test]
fn test_scenario_b_missing_artifact_exits_nonzero() {
    let project = project_with_catalog(SINGLE_ARTIFACT);

    let output = run_check(&project.path().join("buildgate.yaml"), &[]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1), "stdout:\n{stdout}");
    assert!(stdout.contains("  ✗ Readme: README.md (missing)"));
    assert!(stdout.contains("SOME CHECKS FAILED"));
}

#[test]
fn test_scenario_c_manifest_containment() {
    let project = project_with_catalog(MANIFEST_CATALOG);
    write_file(
        project.path(),
        "app/src/main/AndroidManifest.xml",
        "FOREGROUND_SERVICE",
    );

    let output = run_check(&project.path().join("buildgate.yaml"), &[]);
    let stdout = stdout_of(&output);

    assert!(stdout.contains("  ✓ Foreground Service Permission"));
    assert!(stdout.contains("  ✗ Camera Permission"));
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_scenario_d_missing_manifest_is_errored() {
    let project = project_with_catalog(MANIFEST_CATALOG);

    let output = run_check(&project.path().join("buildgate.yaml"), &[]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("  ! Foreground Service Permission"));
    assert!(stdout.contains("  ! Camera Permission"));
    assert!(stdout.contains("(error: failed to read manifest"));
    assert!(stdout.contains("0 passed, 0 failed, 2 errored (2 checks)"));
}

#[test]
fn test_base_flag_overrides_catalog_directory() {
    let project = project_with_catalog(SINGLE_ARTIFACT);
    write_file(project.path(), "android/README.md", "# nested");

    let without = run_check(&project.path().join("buildgate.yaml"), &[]);
    let base = project.path().join("android");
    let with = run_check(
        &project.path().join("buildgate.yaml"),
        &["--base", base.to_str().unwrap()],
    );

    assert_eq!(without.status.code(), Some(1));
    assert_eq!(with.status.code(), Some(0));
}

#[test]
fn test_result_independent_of_working_directory() {
    let project = project_with_catalog(SINGLE_ARTIFACT);
    write_file(project.path(), "README.md", "# ScreenRest\n");
    let elsewhere = tempfile::TempDir::new().unwrap();

    let output = buildgate()
        .current_dir(elsewhere.path())
        .arg("check")
        .arg("--catalog")
        .arg(project.path().join("buildgate.yaml"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_catalog_discovered_in_current_directory() {
    let project = project_with_catalog(SINGLE_ARTIFACT);
    write_file(project.path(), "README.md", "# ScreenRest\n");

    let output = buildgate()
        .current_dir(project.path())
        .arg("check")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
}

#[test]
fn test_repeated_runs_print_identical_reports() {
    let project = project_with_catalog(MANIFEST_CATALOG);
    write_file(
        project.path(),
        "app/src/main/AndroidManifest.xml",
        "<uses-permission android:name=\"FOREGROUND_SERVICE\" />",
    );
    let catalog = project.path().join("buildgate.yaml");

    let first = run_check(&catalog, &["--format", "json"]);
    let second = run_check(&catalog, &["--format", "json"]);

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn test_json_report() {
    let project = project_with_catalog(MANIFEST_CATALOG);
    write_file(
        project.path(),
        "app/src/main/AndroidManifest.xml",
        "FOREGROUND_SERVICE",
    );

    let output = run_check(&project.path().join("buildgate.yaml"), &["--format", "json"]);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["catalog"], "manifest");
    assert_eq!(value["passed"], false);
    let outcomes = &value["groups"][0]["outcomes"];
    assert_eq!(outcomes[0]["status"], "passed");
    assert_eq!(outcomes[1]["status"], "failed");
}

#[cfg(unix)]
mod build_step {
    use super::*;

    fn catalog_with_build(command: &str, timeout_secs: u64) -> String {
        format!(
            "{SINGLE_ARTIFACT}build:\n  command: \"{command}\"\n  timeout_secs: {timeout_secs}\n  tail_lines: 1\n"
        )
    }

    #[test]
    fn test_build_skipped_without_flag() {
        let project = project_with_catalog(&catalog_with_build("exit 1", 5));
        write_file(project.path(), "README.md", "# ScreenRest\n");

        let output = run_check(&project.path().join("buildgate.yaml"), &[]);

        assert_eq!(output.status.code(), Some(0));
        assert!(!stdout_of(&output).contains("--- BUILD ---"));
    }

    #[test]
    fn test_failing_build_shows_tail_and_fails() {
        let project = project_with_catalog(&catalog_with_build(
            "echo first >&2; echo 'e: Unresolved reference' >&2; exit 1",
            5,
        ));
        write_file(project.path(), "README.md", "# ScreenRest\n");

        let output = run_check(&project.path().join("buildgate.yaml"), &["--build"]);
        let stdout = stdout_of(&output);

        assert_eq!(output.status.code(), Some(1));
        assert!(stdout.contains("Error output (last 1 lines):"));
        assert!(stdout.contains("    e: Unresolved reference"));
        assert!(!stdout.contains("    first"));
        assert!(stdout.contains("BUILD STEP FAILED"));
    }

    #[test]
    fn test_build_timeout_override() {
        let project = project_with_catalog(&catalog_with_build("sleep 30; echo done", 300));
        write_file(project.path(), "README.md", "# ScreenRest\n");

        let started = std::time::Instant::now();
        let output = run_check(
            &project.path().join("buildgate.yaml"),
            &["--build", "--build-timeout", "1"],
        );

        assert_eq!(output.status.code(), Some(1));
        assert!(started.elapsed() < std::time::Duration::from_secs(8));
        let stdout = stdout_of(&output);
        assert!(stdout.contains("timed out after 1s"));
        assert!(stdout.contains("[Process killed after 1s timeout]"));
    }

    #[test]
    fn test_passing_build() {
        let project = project_with_catalog(&catalog_with_build("true", 5));
        write_file(project.path(), "README.md", "# ScreenRest\n");

        let output = run_check(&project.path().join("buildgate.yaml"), &["--build"]);

        assert_eq!(output.status.code(), Some(0));
        assert!(stdout_of(&output).contains("  ✓ true"));
    }
}
