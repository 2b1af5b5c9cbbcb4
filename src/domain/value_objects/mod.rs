//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod exit_status;

pub use exit_status::ExitStatus;
