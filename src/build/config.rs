//! Configuration for the build step

use std::path::PathBuf;
use std::time::Duration;

/// Default timeout for the build command (5 minutes)
pub const DEFAULT_BUILD_TIMEOUT: Duration = Duration::from_secs(300);

/// Default number of captured output lines shown on failure
pub const DEFAULT_TAIL_LINES: usize = 50;

/// A shell command to run as the build step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
    pub command: String,
    /// Directory to run in, relative to the base directory when not absolute
    pub working_dir: Option<PathBuf>,
    pub timeout: Duration,
    pub tail_lines: usize,
}

impl BuildStep {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            working_dir: None,
            timeout: DEFAULT_BUILD_TIMEOUT,
            tail_lines: DEFAULT_TAIL_LINES,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_tail_lines(mut self, lines: usize) -> Self {
        self.tail_lines = lines;
        self
    }
}
