//! Verification run
//!
//! Executes every expectation of a catalog in declaration order, streams one
//! line per check to a `Reporter`, and folds the outcomes into a single
//! verdict. A check that errors never stops the run.

mod report;
mod runner;


pub use report::{GroupReport, RunCounts, RunReport};
pub use runner::{evaluate, VerificationRun};
