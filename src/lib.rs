//! deploy-runner - fail-fast deploy step runner
//!
//! Runs a fixed, ordered sequence of external commands (dependency install,
//! asset precompile, asset clean, database migrate) and stops at the first
//! one that fails, exiting with that step's own exit code.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployUseCase, RunReport, StepOutcome};
pub use config::{Config, Verbosity};
pub use domain::entities::{Step, StepPlan};
pub use domain::ports::{CommandExecutor, RunEvent, RunEventSink, SpawnError};
pub use domain::value_objects::ExitStatus;
pub use error::{RunnerError, RunnerResult};
