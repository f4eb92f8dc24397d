//! Optional external build step
//!
//! A catalog may name a shell command (typically the project's compile task)
//! that is run before the report verdict when `check --build` is given.
//! The step is kept apart from the verification run: its outcome is shown
//! next to the report but never changes a check outcome.
//!
//! # Timeout Behavior
//!
//! When the command exceeds its timeout:
//! - The command and everything it started are terminated (SIGKILL to the
//!   process group on Unix, TerminateProcess on Windows)
//! - The outcome is `TimedOut`, distinct from a nonzero exit
//! - Output captured up to that point is kept for the failure tail

mod config;
mod executor;
mod result;


pub use config::{BuildStep, DEFAULT_BUILD_TIMEOUT, DEFAULT_TAIL_LINES};
pub use executor::{BuildRunner, ShellBuildRunner};
pub use result::{BuildOutcome, BuildStatus};
