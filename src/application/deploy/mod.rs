//! Deploy Module
//!
//! Runs the step plan in order and stops at the first failure.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`RunReport`, `StepOutcome`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use deploy_runner::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(executor);
//! let report = use_case.execute(&plan, &DeployOptions::new());
//! std::process::exit(report.exit_code());
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{RunReport, StepOutcome};
pub use use_case::DeployUseCase;
