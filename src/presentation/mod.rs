//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases and event sinks (dependency injection)
//! - `output` - Plan rendering for `--list`

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_deploy_use_case, create_event_sink};
