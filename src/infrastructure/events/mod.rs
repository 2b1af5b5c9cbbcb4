//! Event Sink Implementations
//!
//! Provides concrete implementations of RunEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable progress on stderr

mod console;
mod json;

pub use console::{ConsoleEventSink, ConsoleStyle};
pub use json::JsonEventSink;
