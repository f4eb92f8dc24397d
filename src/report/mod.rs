//! Report rendering
//!
//! The run streams progress through the `Reporter` trait so each check line
//! appears as soon as it is evaluated. `TextReporter` renders the console
//! report; the JSON form is produced from the finished `RunReport`.

mod json;
mod text;

pub use json::{JsonBuild, JsonReport};
pub use text::{TextReporter, Verdict, ERRORED_MARKER, FAILED_MARKER, PASSED_MARKER};

use crate::check::CheckOutcome;
use crate::run::RunReport;

/// Receives progress from a verification run
pub trait Reporter {
    fn group_started(&mut self, name: &str);
    fn check_finished(&mut self, outcome: &CheckOutcome);
    fn run_finished(&mut self, report: &RunReport);
}

/// Discards all progress
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn group_started(&mut self, _name: &str) {}
    fn check_finished(&mut self, _outcome: &CheckOutcome) {}
    fn run_finished(&mut self, _report: &RunReport) {}
}
