//! Process Executor
//!
//! Spawns each step with the runner's environment and working directory and
//! waits for it to exit. The tool's own output reaches the operator as-is.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::entities::Step;
use crate::domain::ports::{CommandExecutor, SpawnError};
use crate::domain::value_objects::ExitStatus;

/// Executor backed by `std::process::Command`
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    /// Send child stdout to our stderr (keeps stdout clean for NDJSON)
    stdout_to_stderr: bool,
    /// Working directory override; `None` runs in the current directory
    cwd: Option<PathBuf>,
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor for `--json` runs: children must not write to stdout.
    pub fn for_json() -> Self {
        Self {
            stdout_to_stderr: true,
            cwd: None,
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    fn command(&self, step: &Step) -> Command {
        let mut cmd = Command::new(step.program());
        cmd.args(step.args()).stdin(Stdio::inherit());

        if self.stdout_to_stderr {
            cmd.stdout(Stdio::from(io::stderr()));
        } else {
            cmd.stdout(Stdio::inherit());
        }
        cmd.stderr(Stdio::inherit());

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        cmd
    }
}

impl CommandExecutor for ProcessExecutor {
    fn execute(&self, step: &Step) -> Result<ExitStatus, SpawnError> {
        let spawn_error = |err: io::Error| SpawnError {
            program: step.program().to_string(),
            message: err.to_string(),
            status: ExitStatus::from_spawn_error(&err),
        };

        let status = self.command(step).status().map_err(spawn_error)?;

        Ok(ExitStatus::from_process(status))
    }
}
