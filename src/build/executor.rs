//! Shell execution of the build step

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use wait_timeout::ChildExt;

use super::config::BuildStep;
use super::result::{BuildOutcome, BuildStatus};

/// Timeout for collecting output from child process pipes
const OUTPUT_COLLECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum captured output per stream (10MB)
const MAX_OUTPUT_SIZE: usize = 10 * 1024 * 1024;

/// Runs a build step and reports how it ended.
///
/// Implementations never return an error: every failure mode, including
/// being unable to start the command, is captured in the outcome.
pub trait BuildRunner {
    fn run(&self, step: &BuildStep, base: &Path) -> BuildOutcome;
}

/// Runs the build command through the system shell
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellBuildRunner;

impl BuildRunner for ShellBuildRunner {
    fn run(&self, step: &BuildStep, base: &Path) -> BuildOutcome {
        let working_dir = match &step.working_dir {
            Some(dir) => base.join(dir),
            None => base.to_path_buf(),
        };
        debug!(command = %step.command, dir = %working_dir.display(), "starting build step");

        let outcome = run_with_timeout(&step.command, &working_dir, step.timeout);
        if !outcome.succeeded() {
            warn!(summary = %outcome.summary(), "build step did not succeed");
        }
        outcome
    }
}

fn run_with_timeout(command: &str, working_dir: &Path, timeout: Duration) -> BuildOutcome {
    let start = Instant::now();

    let mut child = match spawn_shell_command(command, working_dir) {
        Ok(child) => child,
        Err(e) => {
            return BuildOutcome {
                command: command.to_string(),
                status: BuildStatus::SpawnFailed {
                    reason: e.to_string(),
                },
                stdout: String::new(),
                stderr: String::new(),
                duration: start.elapsed(),
            }
        }
    };

    // Drain both pipes while waiting so a chatty build cannot block on a
    // full pipe buffer.
    let (stdout_tx, stdout_rx) = mpsc::channel();
    let (stderr_tx, stderr_rx) = mpsc::channel();

    if let Some(stdout) = child.stdout.take() {
        thread::spawn(move || {
            let _ = stdout_tx.send(read_stream_to_string(stdout));
        });
    } else {
        let _ = stdout_tx.send(String::new());
    }

    if let Some(stderr) = child.stderr.take() {
        thread::spawn(move || {
            let _ = stderr_tx.send(read_stream_to_string(stderr));
        });
    } else {
        let _ = stderr_tx.send(String::new());
    }

    let wait_result = child.wait_timeout(timeout);

    let status = match wait_result {
        Ok(Some(status)) if status.success() => BuildStatus::Succeeded,
        Ok(Some(status)) => BuildStatus::Failed {
            exit_code: status.code(),
        },
        Ok(None) => {
            kill_child_process(&mut child);
            BuildStatus::TimedOut {
                timeout_secs: timeout.as_secs(),
            }
        }
        Err(e) => {
            kill_child_process(&mut child);
            BuildStatus::SpawnFailed {
                reason: format!("failed to wait for command: {e}"),
            }
        }
    };

    let duration = start.elapsed();

    let deadline = Instant::now() + OUTPUT_COLLECTION_TIMEOUT;
    let stdout = collect_output(&stdout_rx, deadline);
    let mut stderr = collect_output(&stderr_rx, deadline);

    if let BuildStatus::TimedOut { timeout_secs } = status {
        stderr.push_str(&format!("\n[Process killed after {timeout_secs}s timeout]"));
    }

    BuildOutcome {
        command: command.to_string(),
        status,
        stdout,
        stderr,
        duration,
    }
}

/// Wait for a reader thread's output until the shared deadline
fn collect_output(rx: &mpsc::Receiver<String>, deadline: Instant) -> String {
    rx.recv_timeout(deadline.saturating_duration_since(Instant::now()))
        .unwrap_or_else(|_| "[output collection timed out]".to_string())
}

/// Spawn a shell command as a child process
///
/// Uses `sh -c` on Unix and `cmd /C` on Windows. The command string is
/// passed as a single argument. On Unix the shell leads a new process
/// group so a timeout can take down everything it started.
fn spawn_shell_command(command: &str, working_dir: &Path) -> std::io::Result<Child> {
    let mut cmd = if cfg!(target_family = "unix") {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    } else {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .current_dir(working_dir);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    cmd.spawn()
}

/// Read a stream to string, capped at MAX_OUTPUT_SIZE
///
/// Data past the cap is drained and discarded so the child never sees a
/// broken pipe.
pub(super) fn read_stream_to_string<R: Read>(mut stream: R) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];

    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                let remaining = MAX_OUTPUT_SIZE.saturating_sub(buf.len());
                let to_copy = n.min(remaining);
                buf.extend_from_slice(&chunk[..to_copy]);
                if to_copy < n {
                    let mut discard = [0u8; 8192];
                    while stream.read(&mut discard).unwrap_or(0) > 0 {}
                    buf.extend_from_slice(b"\n[output truncated at 10MB]");
                    break;
                }
            }
            Err(_) => {
                if buf.is_empty() {
                    return "[error reading output]".to_string();
                }
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn kill_child_process(child: &mut Child) {
    kill_process_group(child);
    // The process may already have exited
    let _ = child.kill();
    let _ = child.wait();
}

/// SIGKILL the group led by the shell, reaching grandchildren that still
/// hold the output pipes
#[cfg(unix)]
fn kill_process_group(child: &Child) {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    let Ok(pgid) = i32::try_from(child.id()) else {
        return;
    };
    if let Err(e) = killpg(Pid::from_raw(pgid), Signal::SIGKILL) {
        debug!(pgid, error = %e, "failed to signal build process group");
    }
}

#[cfg(not(unix))]
fn kill_process_group(_child: &Child) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stream_small_input() {
        let result = read_stream_to_string(Cursor::new(b"BUILD SUCCESSFUL"));
        assert_eq!(result, "BUILD SUCCESSFUL");
    }

    #[test]
    fn test_read_stream_empty_input() {
        let data: &[u8] = b"";
        assert_eq!(read_stream_to_string(Cursor::new(data)), "");
    }

    #[test]
    fn test_read_stream_truncates_at_limit() {
        let data = vec![b'x'; MAX_OUTPUT_SIZE + 1000];
        let result = read_stream_to_string(Cursor::new(data));

        assert!(result.contains("[output truncated at 10MB]"));
        assert!(result.len() <= MAX_OUTPUT_SIZE + 50);
    }

    #[test]
    fn test_read_stream_exact_limit() {
        let data = vec![b'y'; MAX_OUTPUT_SIZE];
        let result = read_stream_to_string(Cursor::new(data));

        assert!(!result.contains("[output truncated"));
        assert_eq!(result.len(), MAX_OUTPUT_SIZE);
    }
}
