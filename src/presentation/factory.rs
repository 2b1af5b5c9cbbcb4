//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::DeployUseCase;
use crate::domain::ports::RunEventSink;
use crate::infrastructure::{ConsoleEventSink, ConsoleStyle, JsonEventSink, ProcessExecutor};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<ProcessExecutor>;

/// Create a deploy use case that spawns real processes.
///
/// In JSON mode child stdout is redirected to stderr so stdout stays NDJSON.
pub fn create_deploy_use_case(json: bool) -> ConcreteDeployUseCase {
    let executor = if json {
        ProcessExecutor::for_json()
    } else {
        ProcessExecutor::new()
    };
    DeployUseCase::new(executor)
}

/// Create the event sink for a run
pub fn create_event_sink(json: bool, style: ConsoleStyle) -> Arc<dyn RunEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stderr(style))
    }
}
