//! Configuration module for deploy-runner
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEPLOY_RUNNER_*)
//! 3. Explicit `--config` file, else project config (./deploy-runner.toml)
//! 4. User config (~/.config/deploy-runner/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Files do not merge: the first file found in (3)/(4) is used as a whole.

mod loader;
mod types;

pub use loader::{ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, StepConfig, Verbosity};
