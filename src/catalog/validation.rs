//! Catalog schema validation

use std::collections::HashSet;

use super::types::{CatalogFile, CheckSpec};

/// Maximum allowed length for check and group labels
pub const MAX_LABEL_LENGTH: usize = 256;

/// A problem found in a catalog document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub group: Option<String>,
}

impl ValidationError {
    fn catalog(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            group: None,
        }
    }

    fn in_group(group: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            group: Some(group.to_string()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(group) = &self.group {
            write!(f, "Group '{}': {}", group, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a label
///
/// Labels must:
/// - Not be empty or whitespace-only
/// - Not contain control characters (except tab)
/// - Be at most MAX_LABEL_LENGTH chars
fn validate_label(label: &str) -> Result<(), String> {
    if label.trim().is_empty() {
        return Err("label cannot be empty".to_string());
    }

    let len = label.chars().count();
    if len > MAX_LABEL_LENGTH {
        return Err(format!(
            "label too long ({len} chars, max {MAX_LABEL_LENGTH})"
        ));
    }

    for (idx, ch) in label.chars().enumerate() {
        if ch.is_control() && ch != '\t' {
            return Err(format!("label contains control character at position {idx}"));
        }
    }

    Ok(())
}

/// Validate a catalog document
///
/// Collects every problem rather than stopping at the first one.
pub fn validate(file: &CatalogFile) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if file.version != 1 {
        errors.push(ValidationError::catalog(format!(
            "Unsupported version: {}. Only version 1 is supported.",
            file.version
        )));
    }

    if file.groups.is_empty() {
        errors.push(ValidationError::catalog("No groups defined"));
    }

    if let Some(build) = &file.build {
        if build.command.trim().is_empty() {
            errors.push(ValidationError::catalog("Build command cannot be empty"));
        }
        if build.timeout_secs == Some(0) {
            errors.push(ValidationError::catalog(
                "Build timeout must be at least 1 second",
            ));
        }
    }

    let default_manifest = file
        .manifest
        .as_ref()
        .filter(|m| !m.as_os_str().is_empty());

    let mut seen = HashSet::new();
    for group in &file.groups {
        if let Err(e) = validate_label(&group.name) {
            errors.push(ValidationError::catalog(format!("Group name: {e}")));
            continue;
        }

        if !seen.insert(group.name.as_str()) {
            errors.push(ValidationError::in_group(&group.name, "Duplicate group name"));
        }

        if group.checks.is_empty() {
            errors.push(ValidationError::in_group(&group.name, "No checks defined"));
        }

        for (idx, check) in group.checks.iter().enumerate() {
            let position = idx + 1;
            match check {
                CheckSpec::Artifact { label, path } => {
                    if path.as_os_str().is_empty() {
                        errors.push(ValidationError::in_group(
                            &group.name,
                            format!("Check {position}: artifact path cannot be empty"),
                        ));
                    }
                    if let Some(Err(e)) = label.as_deref().map(validate_label) {
                        errors.push(ValidationError::in_group(
                            &group.name,
                            format!("Check {position}: {e}"),
                        ));
                    }
                }
                CheckSpec::Manifest {
                    label,
                    manifest,
                    contains,
                } => {
                    if contains.is_empty() {
                        errors.push(ValidationError::in_group(
                            &group.name,
                            format!("Check {position}: 'contains' cannot be empty"),
                        ));
                    }
                    let has_manifest = manifest
                        .as_ref()
                        .is_some_and(|m| !m.as_os_str().is_empty())
                        || default_manifest.is_some();
                    if !has_manifest {
                        errors.push(ValidationError::in_group(
                            &group.name,
                            format!(
                                "Check {position}: no manifest given and no top-level 'manifest' default"
                            ),
                        ));
                    }
                    if let Some(Err(e)) = label.as_deref().map(validate_label) {
                        errors.push(ValidationError::in_group(
                            &group.name,
                            format!("Check {position}: {e}"),
                        ));
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
