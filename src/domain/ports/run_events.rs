//! Run Event Port
//!
//! Provides an observable interface for a deploy run.
//! Enables console progress, JSON event streams, and debugging.

/// Event emitted during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// Run started
    Started { step_count: usize, dry_run: bool },

    /// Dry run: step would execute
    StepPlanned {
        index: usize,
        name: String,
        command: String,
    },

    /// Step is about to execute
    StepStarted {
        index: usize,
        name: String,
        command: String,
    },

    /// Step program could not be started
    SpawnFailed {
        index: usize,
        name: String,
        error: String,
    },

    /// Step finished (successfully or not)
    StepFinished {
        index: usize,
        name: String,
        exit_code: i32,
        duration_ms: u64,
    },

    /// Operator interrupt observed before step `index` started
    Interrupted { index: usize },

    /// Run completed
    Completed {
        exit_code: i32,
        ran: usize,
        skipped: Vec<String>,
    },
}

/// Trait for receiving run events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait RunEventSink: Send + Sync {
    /// Handle a run event
    fn on_event(&self, event: RunEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RunEventSink for NoopEventSink {
    fn on_event(&self, _event: RunEvent) {}
}
