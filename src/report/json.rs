use serde::Serialize;

use crate::build::BuildOutcome;
use crate::run::{GroupReport, RunCounts, RunReport};

/// Machine-readable form of a finished run
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub catalog: &'a str,
    pub base: String,
    pub passed: bool,
    pub counts: RunCounts,
    pub groups: &'a [GroupReport],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<JsonBuild<'a>>,
}

/// Build outcome plus the diagnostic tail of a failed build
#[derive(Debug, Serialize)]
pub struct JsonBuild<'a> {
    #[serde(flatten)]
    pub outcome: &'a BuildOutcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tail: Vec<&'a str>,
}

impl<'a> JsonBuild<'a> {
    pub fn new(outcome: &'a BuildOutcome, tail_lines: usize) -> Self {
        let tail = if outcome.succeeded() {
            Vec::new()
        } else {
            outcome.tail(tail_lines)
        };
        Self { outcome, tail }
    }
}

impl<'a> JsonReport<'a> {
    pub fn new(
        catalog: &'a str,
        base: String,
        report: &'a RunReport,
        build: Option<JsonBuild<'a>>,
    ) -> Self {
        let build_ok = build.as_ref().map_or(true, |b| b.outcome.succeeded());
        Self {
            catalog,
            base,
            passed: report.overall_passed() && build_ok,
            counts: report.counts(),
            groups: &report.groups,
            build,
        }
    }

    pub fn to_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
