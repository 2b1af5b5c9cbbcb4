//! JSON Event Sink
//!
//! Outputs run events as NDJSON for CI/automation consumption.

use crate::domain::ports::{RunEvent, RunEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(obj) = event.as_object_mut() {
            obj.insert("command".to_string(), "deploy".into());
            obj.insert("ts".to_string(), chrono::Utc::now().to_rfc3339().into());
        }

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl RunEventSink for JsonEventSink {
    fn on_event(&self, event: RunEvent) {
        let json = match event {
            RunEvent::Started {
                step_count,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "start",
                    "step_count": step_count,
                    "dry_run": dry_run,
                })
            }

            RunEvent::StepPlanned {
                index,
                name,
                command,
            } => {
                serde_json::json!({
                    "event": "step_planned",
                    "index": index,
                    "name": name,
                    "run": command,
                })
            }

            RunEvent::StepStarted {
                index,
                name,
                command,
            } => {
                serde_json::json!({
                    "event": "step_start",
                    "index": index,
                    "name": name,
                    "run": command,
                })
            }

            RunEvent::SpawnFailed { index, name, error } => {
                serde_json::json!({
                    "event": "step_spawn_error",
                    "index": index,
                    "name": name,
                    "error": error,
                })
            }

            RunEvent::StepFinished {
                index,
                name,
                exit_code,
                duration_ms,
            } => {
                let status = if exit_code == 0 { "success" } else { "failed" };
                serde_json::json!({
                    "event": "step_finish",
                    "index": index,
                    "name": name,
                    "status": status,
                    "exit_code": exit_code,
                    "duration_ms": duration_ms,
                })
            }

            RunEvent::Interrupted { index } => {
                serde_json::json!({
                    "event": "interrupted",
                    "index": index,
                })
            }

            RunEvent::Completed {
                exit_code,
                ran,
                skipped,
            } => {
                let status = if exit_code == 0 { "success" } else { "failed" };
                serde_json::json!({
                    "event": "complete",
                    "status": status,
                    "exit_code": exit_code,
                    "ran": ran,
                    "skipped": skipped,
                })
            }
        };

        self.write_event(json);
    }
}
