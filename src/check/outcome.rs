//! Result types for a single evaluated expectation

use serde::Serialize;

/// Status of an evaluated expectation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckStatus {
    /// The artifact exists or the declaration was found
    Passed,
    /// The artifact or declaration is absent
    Failed,
    /// The check could not be performed (e.g. unreadable manifest)
    Errored { reason: String },
}

impl CheckStatus {
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckStatus::Passed)
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, CheckStatus::Errored { .. })
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Passed => write!(f, "passed"),
            CheckStatus::Failed => write!(f, "failed"),
            CheckStatus::Errored { .. } => write!(f, "errored"),
        }
    }
}

/// Outcome of evaluating one expectation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Label copied from the expectation
    pub label: String,
    /// What was inspected, as displayed in the report
    pub target: String,
    #[serde(flatten)]
    pub status: CheckStatus,
}

impl CheckOutcome {
    pub fn new(label: impl Into<String>, target: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            status,
        }
    }

    pub fn passed(&self) -> bool {
        self.status.is_passed()
    }
}
