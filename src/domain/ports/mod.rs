//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_executor;
pub mod run_events;

pub use command_executor::{CommandExecutor, SpawnError};
pub use run_events::{NoopEventSink, RunEvent, RunEventSink};
