//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process/` - Command executor backed by `std::process`
//! - `events/` - Run event sinks (console, NDJSON)

pub mod events;
pub mod process;

// Re-export for convenience
pub use events::{ConsoleEventSink, ConsoleStyle, JsonEventSink};
pub use process::ProcessExecutor;
