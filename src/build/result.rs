//! Result types for the build step

use serde::Serialize;
use std::time::Duration;

/// How the build command ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BuildStatus {
    Succeeded,
    /// Exited nonzero; `exit_code` is `None` when killed by a signal
    Failed { exit_code: Option<i32> },
    /// Killed after exceeding its timeout
    TimedOut { timeout_secs: u64 },
    /// The shell could not be started
    SpawnFailed { reason: String },
}

/// Outcome of running the build step
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutcome {
    pub command: String,
    #[serde(flatten)]
    pub status: BuildStatus,
    #[serde(skip)]
    pub stdout: String,
    #[serde(skip)]
    pub stderr: String,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

impl BuildOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self.status, BuildStatus::Succeeded)
    }

    /// Get a summary of the outcome
    pub fn summary(&self) -> String {
        let duration_ms = self.duration.as_millis();
        match &self.status {
            BuildStatus::Succeeded => format!("PASSED - {} ({duration_ms}ms)", self.command),
            BuildStatus::Failed { exit_code } => format!(
                "FAILED - {} ({duration_ms}ms, exit code: {})",
                self.command,
                exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "?".to_string())
            ),
            BuildStatus::TimedOut { timeout_secs } => format!(
                "TIMEOUT - {} (killed after {timeout_secs}s)",
                self.command
            ),
            BuildStatus::SpawnFailed { reason } => {
                format!("ERROR - {} ({reason})", self.command)
            }
        }
    }

    /// Last `n` lines of captured diagnostics
    ///
    /// Uses stderr, falling back to stdout when the command wrote nothing
    /// to stderr.
    pub fn tail(&self, n: usize) -> Vec<&str> {
        let source = if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        };
        let lines: Vec<&str> = source.lines().collect();
        let skip = lines.len().saturating_sub(n);
        lines[skip..].to_vec()
    }
}
