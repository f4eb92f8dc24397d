//! Evaluation of catalog expectations

use tracing::{debug, info, warn};

use super::report::{GroupReport, RunReport};
use crate::base::BaseDir;
use crate::catalog::{Catalog, Expectation, ExpectationKind};
use crate::check::{artifact_exists, manifest_contains, CheckOutcome, CheckStatus};
use crate::report::{NullReporter, Reporter};
use crate::utils::single_line;

/// Evaluate a single expectation against the base directory
pub fn evaluate(expectation: &Expectation, base: &BaseDir) -> CheckOutcome {
    match &expectation.kind {
        ExpectationKind::Artifact { path } => {
            let full_path = base.resolve_path(path);
            let status = if artifact_exists(&full_path) {
                CheckStatus::Passed
            } else {
                CheckStatus::Failed
            };
            let target = single_line(&base.display(&full_path)).into_owned();
            CheckOutcome::new(&expectation.label, target, status)
        }
        ExpectationKind::Manifest { manifest, contains } => {
            let full_path = base.resolve_path(manifest);
            let target = format!(
                "\"{}\" in {}",
                single_line(contains),
                single_line(&base.display(&full_path))
            );
            let status = match manifest_contains(&full_path, contains) {
                Ok(true) => CheckStatus::Passed,
                Ok(false) => CheckStatus::Failed,
                Err(e) => {
                    warn!(label = %expectation.label, error = %e, "manifest check errored");
                    CheckStatus::Errored {
                        reason: e.to_string(),
                    }
                }
            };
            CheckOutcome::new(&expectation.label, target, status)
        }
    }
}

/// One verification of a catalog against a base directory
///
/// Holds no state between executions: running it twice against an
/// unchanged tree produces the same report.
pub struct VerificationRun<'a> {
    catalog: &'a Catalog,
    base: &'a BaseDir,
}

impl<'a> VerificationRun<'a> {
    pub fn new(catalog: &'a Catalog, base: &'a BaseDir) -> Self {
        Self { catalog, base }
    }

    /// Evaluate every expectation without reporting progress
    pub fn execute(&self) -> RunReport {
        self.execute_with(&mut NullReporter)
    }

    /// Evaluate every expectation, streaming progress to `reporter`
    pub fn execute_with(&self, reporter: &mut dyn Reporter) -> RunReport {
        info!(
            catalog = %self.catalog.name,
            base = %self.base.root().display(),
            expectations = self.catalog.expectation_count(),
            "starting verification run"
        );

        let mut report = RunReport::default();

        for group in &self.catalog.groups {
            reporter.group_started(&group.name);
            let mut group_report = GroupReport::new(&group.name);

            for expectation in &group.expectations {
                let outcome = evaluate(expectation, self.base);
                debug!(
                    group = %group.name,
                    label = %outcome.label,
                    status = %outcome.status,
                    "check finished"
                );
                reporter.check_finished(&outcome);
                group_report.outcomes.push(outcome);
            }

            report.groups.push(group_report);
        }

        let counts = report.counts();
        info!(
            passed = counts.passed,
            failed = counts.failed,
            errored = counts.errored,
            verdict = report.overall_passed(),
            "verification run finished"
        );
        reporter.run_finished(&report);

        report
    }
}
