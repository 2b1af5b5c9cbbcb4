//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Runs a step plan fail-fast and reports the outcome

pub mod deploy;

pub use deploy::{DeployOptions, DeployUseCase, RunReport, StepOutcome};
