//! Command Executor Port
//!
//! Runs one step as an external process and reports how it ended.

use std::fmt;

use crate::domain::entities::Step;
use crate::domain::value_objects::ExitStatus;

/// The step's program could not be started at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnError {
    pub program: String,
    pub message: String,
    /// Shell-style code standing in for the missing exit status (126/127)
    pub status: ExitStatus,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not start '{}': {}", self.program, self.message)
    }
}

impl std::error::Error for SpawnError {}

/// Runs steps synchronously, one at a time.
///
/// Implementations:
/// - ProcessExecutor: spawns the real program with inherited stdio
/// - test fakes that record invocations and return scripted statuses
pub trait CommandExecutor: Send + Sync {
    /// Run the step to completion and return its exit status.
    fn execute(&self, step: &Step) -> Result<ExitStatus, SpawnError>;
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for &T {
    fn execute(&self, step: &Step) -> Result<ExitStatus, SpawnError> {
        (**self).execute(step)
    }
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for Box<T> {
    fn execute(&self, step: &Step) -> Result<ExitStatus, SpawnError> {
        (**self).execute(step)
    }
}
