//! Error types for deploy-runner
//!
//! Uses `thiserror` for library errors. A failing step is not an error here:
//! it is an ordinary outcome recorded in the run report.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for runner operations
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Main error type for runner setup (config loading, plan resolution)
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// A plan was built from an empty `steps` list
    #[error("empty step list in {origin}")]
    EmptyPlan { origin: String },

    /// A configured step is unusable
    #[error("step {index} is invalid: {reason}")]
    InvalidStep { index: usize, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
