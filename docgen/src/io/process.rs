//! Running documentation commands through the platform shell.

use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, error, instrument, warn};
use wait_timeout::ChildExt;

/// Outcome of a shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellStatus {
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub timed_out: bool,
}

impl ShellStatus {
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            timed_out: false,
        }
    }

    pub fn success(&self) -> bool {
        !self.timed_out && self.code == Some(0)
    }
}

impl From<ExitStatus> for ShellStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
            timed_out: false,
        }
    }
}

/// Abstraction over shell execution.
///
/// The command runs in the process's current working directory. Tests use
/// scripted runners that return predetermined statuses without spawning.
pub trait ShellRunner {
    fn run(&self, command: &str) -> Result<ShellStatus>;
}

/// Runs commands with `sh -c` (`cmd /C` on Windows), inheriting stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell {
    /// Kill the command after this long. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl SystemShell {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl ShellRunner for SystemShell {
    #[instrument(skip_all, fields(timeout = ?self.timeout))]
    fn run(&self, command: &str) -> Result<ShellStatus> {
        let mut cmd = shell_command(command);
        cmd.stdin(Stdio::null());

        debug!(command, "spawning shell");
        let mut child = match cmd.spawn() {
            Ok(c) => c,
            Err(e) => {
                error!(err = %e, "failed to spawn shell");
                return Err(e).context("spawn shell");
            }
        };

        let status = match self.timeout {
            None => child.wait().context("wait for shell")?,
            Some(timeout) => match child.wait_timeout(timeout).context("wait for shell")? {
                Some(status) => status,
                None => {
                    warn!(timeout_secs = timeout.as_secs(), "command timed out, killing");
                    child.kill().context("kill shell")?;
                    let status = child.wait().context("wait shell after kill")?;
                    return Ok(ShellStatus {
                        code: status.code(),
                        timed_out: true,
                    });
                }
            },
        };

        debug!(exit_code = ?status.code(), "command finished");
        Ok(status.into())
    }
}

fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn reports_exit_code() {
        let shell = SystemShell::default();
        assert!(shell.run("true").expect("run").success());

        let status = shell.run("exit 3").expect("run");
        assert_eq!(status, ShellStatus::exited(3));
        assert!(!status.success());
    }

    #[test]
    fn and_chain_stops_at_failed_install() {
        let shell = SystemShell::default();
        let status = shell.run("false && true").expect("run");
        assert!(!status.success());
    }

    #[test]
    fn timeout_kills_command() {
        let shell = SystemShell::new(Some(Duration::from_millis(100)));
        let status = shell.run("sleep 5").expect("run");
        assert!(status.timed_out);
        assert!(!status.success());
    }
}
