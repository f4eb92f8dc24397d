//! Run report and verdict fold

use serde::Serialize;

use crate::check::{CheckOutcome, CheckStatus};

/// Outcomes of one group, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    pub name: String,
    pub outcomes: Vec<CheckOutcome>,
}

impl GroupReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }
}

/// Tally of outcome statuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounts {
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl RunCounts {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errored
    }
}

/// Every outcome of a run, grouped as declared
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub groups: Vec<GroupReport>,
}

impl RunReport {
    /// Iterate all outcomes across groups, in order
    pub fn outcomes(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.groups.iter().flat_map(|g| g.outcomes.iter())
    }

    /// The verdict: true only if every outcome passed
    ///
    /// Errored counts as not passed. A report with no outcomes passes.
    pub fn overall_passed(&self) -> bool {
        self.outcomes()
            .fold(true, |acc, outcome| acc && outcome.passed())
    }

    pub fn counts(&self) -> RunCounts {
        self.outcomes()
            .fold(RunCounts::default(), |mut counts, outcome| {
                match outcome.status {
                    CheckStatus::Passed => counts.passed += 1,
                    CheckStatus::Failed => counts.failed += 1,
                    CheckStatus::Errored { .. } => counts.errored += 1,
                }
                counts
            })
    }

    /// Statuses in run order, for comparing two runs
    pub fn statuses(&self) -> Vec<&CheckStatus> {
        self.outcomes().map(|o| &o.status).collect()
    }
}
