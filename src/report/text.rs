//! Console report

use colored::Colorize;
use std::fmt;
use std::io::{self, Write};

use super::Reporter;
use crate::build::{BuildOutcome, BuildStatus};
use crate::check::{CheckOutcome, CheckStatus};
use crate::run::RunReport;

pub const PASSED_MARKER: &str = "✓";
pub const FAILED_MARKER: &str = "✗";
pub const ERRORED_MARKER: &str = "!";

const RULE_WIDTH: usize = 70;

/// What the final verdict line reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub checks_passed: bool,
    /// False only when a build step ran and did not succeed
    pub build_passed: bool,
}

impl Verdict {
    pub fn passed(self) -> bool {
        self.checks_passed && self.build_passed
    }

    fn failure_headline(self) -> &'static str {
        match (self.checks_passed, self.build_passed) {
            (false, false) => "SOME CHECKS FAILED AND THE BUILD STEP FAILED",
            (true, false) => "BUILD STEP FAILED",
            _ => "SOME CHECKS FAILED",
        }
    }
}

/// Line-oriented report written to any `Write`
///
/// The first write error is kept and returned by `finish`; later writes are
/// skipped.
pub struct TextReporter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_fmt(args).and_then(|_| self.out.write_all(b"\n")) {
            self.error = Some(e);
        }
    }

    fn rule(&mut self) {
        self.emit(format_args!("{}", "=".repeat(RULE_WIDTH)));
    }

    /// Banner naming the catalog and base directory
    pub fn header(&mut self, catalog_name: &str, base: &str) {
        self.rule();
        self.emit(format_args!("{}", catalog_name.to_uppercase().bold()));
        self.emit(format_args!("{} {}", "Base:".dimmed(), base));
        self.rule();
    }

    /// Build step result, with the tail of its diagnostics on failure
    pub fn build_finished(&mut self, outcome: &BuildOutcome, tail_lines: usize) {
        self.emit(format_args!(""));
        self.emit(format_args!("{}", "--- BUILD ---".bold()));

        let ms = outcome.duration.as_millis();
        match &outcome.status {
            BuildStatus::Succeeded => {
                self.emit(format_args!(
                    "  {} {} ({ms}ms)",
                    PASSED_MARKER.green().bold(),
                    outcome.command
                ));
                return;
            }
            BuildStatus::Failed { exit_code } => {
                let code = exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "?".to_string());
                self.emit(format_args!(
                    "  {} {} (exit code {code}, {ms}ms)",
                    FAILED_MARKER.red().bold(),
                    outcome.command
                ));
            }
            BuildStatus::TimedOut { timeout_secs } => {
                self.emit(format_args!(
                    "  {} {} (timed out after {timeout_secs}s)",
                    "⏱".yellow().bold(),
                    outcome.command
                ));
            }
            BuildStatus::SpawnFailed { reason } => {
                self.emit(format_args!(
                    "  {} {} (could not start: {reason})",
                    ERRORED_MARKER.yellow().bold(),
                    outcome.command
                ));
                return;
            }
        }

        let tail = outcome.tail(tail_lines);
        if !tail.is_empty() {
            self.emit(format_args!(
                "\n  {}",
                format!("Error output (last {} lines):", tail.len()).dimmed()
            ));
            for line in tail {
                self.emit(format_args!("    {line}"));
            }
        }
    }

    /// Final verdict line, plus static guidance on a full pass
    pub fn verdict(&mut self, verdict: Verdict, next_steps: &[String]) {
        self.emit(format_args!(""));
        self.rule();
        if verdict.passed() {
            self.emit(format_args!(
                "{} {}",
                PASSED_MARKER.green().bold(),
                "ALL CHECKS PASSED".green().bold()
            ));
            if !next_steps.is_empty() {
                self.emit(format_args!("\n{}", "Next steps:".bold()));
                for (idx, step) in next_steps.iter().enumerate() {
                    self.emit(format_args!("{}. {step}", idx + 1));
                }
            }
        } else {
            self.emit(format_args!(
                "{} {} - review the output above",
                FAILED_MARKER.red().bold(),
                verdict.failure_headline().red().bold()
            ));
        }
    }

    /// Flush and hand back the writer, or the first write error
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn group_started(&mut self, name: &str) {
        self.emit(format_args!("\n{}", format!("--- {name} ---").bold()));
    }

    fn check_finished(&mut self, outcome: &CheckOutcome) {
        let marker = match &outcome.status {
            CheckStatus::Passed => PASSED_MARKER.green().bold(),
            CheckStatus::Failed => FAILED_MARKER.red().bold(),
            CheckStatus::Errored { .. } => ERRORED_MARKER.yellow().bold(),
        };

        let mut line = format!("  {marker} {}", outcome.label);
        if outcome.target != outcome.label {
            line.push_str(&format!(": {}", outcome.target));
        }
        match &outcome.status {
            CheckStatus::Failed => line.push_str(&format!(" {}", "(missing)".dimmed())),
            CheckStatus::Errored { reason } => {
                line.push_str(&format!(" {}", format!("(error: {reason})").yellow()))
            }
            CheckStatus::Passed => {}
        }

        self.emit(format_args!("{line}"));
    }

    fn run_finished(&mut self, report: &RunReport) {
        self.emit(format_args!(""));
        self.rule();
        self.emit(format_args!("{}", "VERIFICATION SUMMARY".bold()));
        self.rule();

        for group in &report.groups {
            if group.passed() {
                self.emit(format_args!(
                    "{} - {}",
                    format!("{PASSED_MARKER} PASS").green(),
                    group.name
                ));
            } else {
                self.emit(format_args!(
                    "{} - {}",
                    format!("{FAILED_MARKER} FAIL").red(),
                    group.name
                ));
            }
        }

        let counts = report.counts();
        self.emit(format_args!(
            "\n{} passed, {} failed, {} errored ({} checks)",
            counts.passed,
            counts.failed,
            counts.errored,
            counts.total()
        ));
    }
}
