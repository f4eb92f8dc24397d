//! Verification command
//!
//! Runs every catalog check, optionally the build step, and reports the
//! verdict. Returns whether the gate passed; `main` turns that into the
//! process exit status.

use anyhow::{bail, Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use super::common;
use crate::base::BaseDir;
use crate::build::{BuildOutcome, BuildRunner, BuildStep, ShellBuildRunner};
use crate::catalog::Catalog;
use crate::report::{JsonBuild, JsonReport, TextReporter, Verdict};
use crate::run::VerificationRun;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub catalog: Option<PathBuf>,
    pub base: Option<PathBuf>,
    pub build: bool,
    pub build_timeout: Option<u64>,
    pub format: OutputFormat,
}

/// Execute the check command against stdout
pub fn execute(opts: &CheckOptions) -> Result<bool> {
    let loaded = common::load(opts.catalog.as_deref())?;
    let default_base = loaded.default_base();
    let base = BaseDir::resolve(opts.base.as_deref(), Some(&default_base))
        .context("Failed to resolve base directory")?;

    let build_step = if opts.build {
        Some(select_build_step(&loaded.catalog, opts.build_timeout)?)
    } else {
        None
    };

    let stdout = io::stdout();
    verify(
        &loaded.catalog,
        &base,
        build_step.as_ref(),
        &ShellBuildRunner,
        opts.format,
        stdout.lock(),
    )
}

fn select_build_step(catalog: &Catalog, timeout_override: Option<u64>) -> Result<BuildStep> {
    let Some(step) = catalog.build.clone() else {
        bail!("--build given but the catalog defines no build step");
    };
    match timeout_override {
        Some(0) => bail!("--build-timeout must be at least 1 second"),
        Some(secs) => Ok(step.with_timeout(Duration::from_secs(secs))),
        None => Ok(step),
    }
}

/// Run the checks and the optional build step, writing the report to `out`
///
/// Returns true when every check passed and the build step, if any,
/// succeeded.
pub fn verify<W: Write>(
    catalog: &Catalog,
    base: &BaseDir,
    build: Option<&BuildStep>,
    runner: &dyn BuildRunner,
    format: OutputFormat,
    mut out: W,
) -> Result<bool> {
    let run = VerificationRun::new(catalog, base);
    let base_display = base.root().display().to_string();

    match format {
        OutputFormat::Text => {
            let mut reporter = TextReporter::new(out);
            reporter.header(&catalog.name, &base_display);

            let report = run.execute_with(&mut reporter);

            let build_outcome = build.map(|step| {
                info!(command = %step.command, "running build step");
                (runner.run(step, base.root()), step.tail_lines)
            });
            if let Some((outcome, tail_lines)) = &build_outcome {
                reporter.build_finished(outcome, *tail_lines);
            }

            let verdict = Verdict {
                checks_passed: report.overall_passed(),
                build_passed: build_outcome
                    .as_ref()
                    .map_or(true, |(outcome, _)| outcome.succeeded()),
            };
            reporter.verdict(verdict, &catalog.next_steps);
            reporter.finish().context("Failed to write report")?;

            Ok(verdict.passed())
        }
        OutputFormat::Json => {
            let report = run.execute();
            let build_outcome: Option<(BuildOutcome, usize)> =
                build.map(|step| (runner.run(step, base.root()), step.tail_lines));

            let json = JsonReport::new(
                &catalog.name,
                base_display,
                &report,
                build_outcome
                    .as_ref()
                    .map(|(outcome, tail_lines)| JsonBuild::new(outcome, *tail_lines)),
            );
            writeln!(out, "{}", json.to_string_pretty()?).context("Failed to write report")?;

            Ok(json.passed)
        }
    }
}
