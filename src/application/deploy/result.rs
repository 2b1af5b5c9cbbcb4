//! Run Result
//!
//! Result types for a deploy run.

use std::time::Duration;

use crate::domain::value_objects::ExitStatus;

/// A step that actually ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub name: String,
    pub status: ExitStatus,
    pub duration: Duration,
}

/// Result of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Steps that ran, in execution order
    pub outcomes: Vec<StepOutcome>,
    /// Index into `outcomes` of the failing step
    pub failed: Option<usize>,
    /// An operator interrupt stopped the run early
    pub interrupted: bool,
    /// Steps that never ran
    pub skipped: Vec<String>,
    pub dry_run: bool,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process exit code for the whole run.
    ///
    /// The failing step's code, else 130 for an interrupt, else 0.
    pub fn exit_code(&self) -> i32 {
        self.exit_status().code()
    }

    pub fn exit_status(&self) -> ExitStatus {
        if let Some(outcome) = self.failed_step() {
            return outcome.status;
        }
        if self.interrupted {
            return ExitStatus::INTERRUPTED;
        }
        ExitStatus::SUCCESS
    }

    pub fn failed_step(&self) -> Option<&StepOutcome> {
        self.failed.and_then(|i| self.outcomes.get(i))
    }

    pub fn is_success(&self) -> bool {
        self.exit_status().success()
    }
}
