//! Process execution
//!
//! Runs steps as child processes of the runner.

mod executor;

pub use executor::ProcessExecutor;
