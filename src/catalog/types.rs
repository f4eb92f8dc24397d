//! Catalog types
//!
//! `CatalogFile` mirrors the on-disk document and keeps every optional
//! field optional. `Catalog` is the resolved, immutable form the run
//! works from: labels filled in, manifest defaults applied.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::build::BuildStep;

/// Catalog document as written by users
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    pub version: u32,
    #[serde(default)]
    pub name: Option<String>,
    /// Base directory, relative to the catalog file
    #[serde(default)]
    pub base: Option<PathBuf>,
    /// Default manifest for declaration checks that do not name one
    #[serde(default)]
    pub manifest: Option<PathBuf>,
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
    /// Static guidance printed after a full pass
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub build: Option<BuildSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupSpec {
    pub name: String,
    #[serde(default)]
    pub checks: Vec<CheckSpec>,
}

/// A single check as written in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum CheckSpec {
    /// A path that must exist
    Artifact {
        #[serde(default)]
        label: Option<String>,
        path: PathBuf,
    },
    /// A substring that must appear in a manifest
    Manifest {
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        manifest: Option<PathBuf>,
        contains: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSpec {
    pub command: String,
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub tail_lines: Option<usize>,
}

impl BuildSpec {
    pub fn to_step(&self) -> BuildStep {
        let mut step = BuildStep::new(self.command.clone());
        if let Some(dir) = &self.working_dir {
            step = step.with_working_dir(dir.clone());
        }
        if let Some(secs) = self.timeout_secs {
            step = step.with_timeout(Duration::from_secs(secs));
        }
        if let Some(lines) = self.tail_lines {
            step = step.with_tail_lines(lines);
        }
        step
    }
}

/// What an expectation inspects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectationKind {
    /// The path must exist (file or directory)
    Artifact { path: PathBuf },
    /// The manifest must contain the substring
    Manifest { manifest: PathBuf, contains: String },
}

/// One declared requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    pub label: String,
    pub kind: ExpectationKind,
}

impl Expectation {
    pub fn artifact(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            kind: ExpectationKind::Artifact { path: path.into() },
        }
    }

    pub fn declaration(
        label: impl Into<String>,
        manifest: impl Into<PathBuf>,
        contains: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            kind: ExpectationKind::Manifest {
                manifest: manifest.into(),
                contains: contains.into(),
            },
        }
    }
}

/// A named, ordered collection of expectations
///
/// Groups only structure the report. Members never depend on each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub expectations: Vec<Expectation>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expectations: Vec::new(),
        }
    }

    /// Append an artifact presence expectation
    pub fn artifact(mut self, label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.expectations.push(Expectation::artifact(label, path));
        self
    }

    /// Append a manifest declaration expectation
    pub fn declaration(
        mut self,
        label: impl Into<String>,
        manifest: impl Into<PathBuf>,
        contains: impl Into<String>,
    ) -> Self {
        self.expectations
            .push(Expectation::declaration(label, manifest, contains));
        self
    }

    pub fn len(&self) -> usize {
        self.expectations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expectations.is_empty()
    }
}

/// Resolved expectation catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub name: String,
    pub groups: Vec<Group>,
    pub next_steps: Vec<String>,
    pub build: Option<BuildStep>,
}

impl Catalog {
    pub fn builder(name: impl Into<String>) -> super::CatalogBuilder {
        super::CatalogBuilder::new(name)
    }

    /// Total number of expectations across all groups
    pub fn expectation_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}
