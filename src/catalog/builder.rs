use std::path::PathBuf;

use super::types::{Catalog, Group};
use crate::build::BuildStep;

/// Assembles a `Catalog` in code
///
/// ```
/// use buildgate::catalog::{Catalog, Group};
///
/// let catalog = Catalog::builder("Part 2")
///     .group(
///         Group::new("Phase 3: Usage Tracking Service")
///             .artifact("UsageCalculator", "app/service/UsageCalculator.kt"),
///     )
///     .group(Group::new("Manifest").declaration(
///         "Foreground Service Permission",
///         "app/src/main/AndroidManifest.xml",
///         "FOREGROUND_SERVICE",
///     ))
///     .build();
///
/// assert_eq!(catalog.expectation_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    name: String,
    groups: Vec<Group>,
    next_steps: Vec<String>,
    build: Option<BuildStep>,
}

impl CatalogBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
            next_steps: Vec::new(),
            build: None,
        }
    }

    pub fn group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Add a group of artifact checks labelled by their own path
    pub fn artifact_group<I, P>(mut self, name: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let group = paths.into_iter().fold(Group::new(name), |group, path| {
            let path = path.into();
            let label = path.display().to_string();
            group.artifact(label, path)
        });
        self.groups.push(group);
        self
    }

    pub fn next_step(mut self, step: impl Into<String>) -> Self {
        self.next_steps.push(step.into());
        self
    }

    pub fn build_step(mut self, step: BuildStep) -> Self {
        self.build = Some(step);
        self
    }

    pub fn build(self) -> Catalog {
        Catalog {
            name: self.name,
            groups: self.groups,
            next_steps: self.next_steps,
            build: self.build,
        }
    }
}
