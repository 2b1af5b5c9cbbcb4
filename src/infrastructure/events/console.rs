//! Console Event Sink
//!
//! Human-readable progress lines on stderr.
//!
//! At the default verbosity a real run adds nothing to the steps' own
//! output. Progress, failure and summary lines start at `Verbose`, step
//! durations at `Debug`. A dry run lists its plan from `Normal` up.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{style, Color, Stylize};

use crate::config::Verbosity;
use crate::domain::ports::{RunEvent, RunEventSink};

/// Rendering options resolved by the CLI from config + terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStyle {
    pub color: bool,
    pub unicode: bool,
    pub verbosity: Verbosity,
}

impl Default for ConsoleStyle {
    fn default() -> Self {
        Self {
            color: false,
            unicode: true,
            verbosity: Verbosity::Normal,
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    warning: &'static str,
    progress: &'static str,
    pending: &'static str,
    deploy: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warning: "⚠",
            progress: "●",
            pending: "○",
            deploy: "📦",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warning: "[WARN]",
            progress: "[..]",
            pending: "[ ]",
            deploy: "[DEPLOY]",
        }
    }
}

#[derive(Default)]
struct RunState {
    total: usize,
    dry_run: bool,
}

/// Event sink that renders progress for humans
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    style: ConsoleStyle,
    icons: Icons,
    state: Mutex<RunState>,
}

impl ConsoleEventSink {
    /// Create a console sink writing to stderr
    pub fn stderr(style: ConsoleStyle) -> Self {
        Self::with_writer(io::stderr(), style)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, style: ConsoleStyle) -> Self {
        let icons = if style.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };
        Self {
            writer: Mutex::new(Box::new(writer)),
            style,
            icons,
            state: Mutex::new(RunState::default()),
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.style.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    fn shows(&self, level: Verbosity) -> bool {
        self.style.verbosity >= level
    }

    fn counter(&self, index: usize) -> String {
        let total = self.state.lock().map(|s| s.total).unwrap_or(0);
        format!("[{}/{}]", index + 1, total)
    }
}

impl RunEventSink for ConsoleEventSink {
    fn on_event(&self, event: RunEvent) {
        match event {
            RunEvent::Started {
                step_count,
                dry_run,
            } => {
                if let Ok(mut state) = self.state.lock() {
                    state.total = step_count;
                    state.dry_run = dry_run;
                }
                let level = if dry_run {
                    Verbosity::Normal
                } else {
                    Verbosity::Verbose
                };
                if self.shows(level) {
                    let what = if dry_run { "Dry run" } else { "Running" };
                    let noun = if step_count == 1 { "step" } else { "steps" };
                    self.line(format!(
                        "{} {} {} {}",
                        self.icons.deploy, what, step_count, noun
                    ));
                }
            }

            // Only emitted for --dry-run, which asks for the listing
            RunEvent::StepPlanned {
                index,
                name,
                command,
            } => {
                if self.shows(Verbosity::Normal) {
                    self.line(format!(
                        "{} {} {}: {}",
                        self.paint(self.icons.pending, Color::DarkGrey),
                        self.counter(index),
                        name,
                        command
                    ));
                }
            }

            RunEvent::StepStarted {
                index,
                name,
                command,
            } => {
                if self.shows(Verbosity::Verbose) {
                    self.line(format!(
                        "{} {} {}: {}",
                        self.paint(self.icons.progress, Color::Cyan),
                        self.counter(index),
                        name,
                        self.paint(&command, Color::DarkGrey)
                    ));
                }
            }

            RunEvent::SpawnFailed { error, .. } => {
                if self.shows(Verbosity::Verbose) {
                    self.line(format!(
                        "{} {}",
                        self.paint(self.icons.cross, Color::Red),
                        error
                    ));
                }
            }

            RunEvent::StepFinished {
                name,
                exit_code,
                duration_ms,
                ..
            } => {
                if !self.shows(Verbosity::Verbose) {
                    return;
                }
                if exit_code != 0 {
                    self.line(format!(
                        "{} {} failed (exit {})",
                        self.paint(self.icons.cross, Color::Red),
                        name,
                        exit_code
                    ));
                } else if self.shows(Verbosity::Debug) {
                    self.line(format!(
                        "{} {} ({})",
                        self.paint(self.icons.check, Color::Green),
                        name,
                        format_duration(duration_ms)
                    ));
                } else {
                    self.line(format!(
                        "{} {}",
                        self.paint(self.icons.check, Color::Green),
                        name
                    ));
                }
            }

            RunEvent::Interrupted { index } => {
                if self.shows(Verbosity::Verbose) {
                    self.line(format!(
                        "{} Interrupted before step {}",
                        self.paint(self.icons.warning, Color::Yellow),
                        index + 1
                    ));
                }
            }

            RunEvent::Completed {
                exit_code,
                ran,
                skipped,
            } => {
                let dry_run = self.state.lock().map(|s| s.dry_run).unwrap_or(false);
                if dry_run || !self.shows(Verbosity::Verbose) {
                    return;
                }

                if exit_code == 0 {
                    self.line(format!(
                        "{} Deploy complete ({} of {} steps)",
                        self.paint(self.icons.check, Color::Green),
                        ran,
                        ran + skipped.len()
                    ));
                    return;
                }

                let mut text = format!(
                    "{} Deploy failed with exit {}",
                    self.paint(self.icons.cross, Color::Red),
                    exit_code
                );
                if !skipped.is_empty() {
                    text.push_str(&format!("; skipped: {}", skipped.join(", ")));
                }
                self.line(text);
            }
        }
    }
}

/// `850ms`, `1.2s`, `2m 03s`
fn format_duration(ms: u64) -> String {
    if ms < 1_000 {
        return format!("{}ms", ms);
    }
    if ms < 60_000 {
        return format!("{:.1}s", ms as f64 / 1_000.0);
    }
    let secs = ms / 1_000;
    format!("{}m {:02}s", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone)]
    struct TestWriter(Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sink(verbosity: Verbosity) -> (ConsoleEventSink, TestWriter) {
        let writer = TestWriter(Arc::default());
        let style = ConsoleStyle {
            color: false,
            unicode: false,
            verbosity,
        };
        (ConsoleEventSink::with_writer(writer.clone(), style), writer)
    }

    fn output(writer: &TestWriter) -> String {
        String::from_utf8(writer.0.lock().unwrap().clone()).unwrap()
    }

    fn failing_run(sink: &ConsoleEventSink) {
        sink.on_event(RunEvent::Started {
            step_count: 2,
            dry_run: false,
        });
        sink.on_event(RunEvent::StepStarted {
            index: 0,
            name: "install".to_string(),
            command: "bundle install".to_string(),
        });
        sink.on_event(RunEvent::StepFinished {
            index: 0,
            name: "install".to_string(),
            exit_code: 0,
            duration_ms: 1_240,
        });
        sink.on_event(RunEvent::StepStarted {
            index: 1,
            name: "migrate".to_string(),
            command: "bundle exec rake db:migrate".to_string(),
        });
        sink.on_event(RunEvent::StepFinished {
            index: 1,
            name: "migrate".to_string(),
            exit_code: 1,
            duration_ms: 300,
        });
        sink.on_event(RunEvent::Completed {
            exit_code: 1,
            ran: 2,
            skipped: vec![],
        });
    }

    #[test]
    fn normal_output_adds_nothing_to_a_failing_run() {
        let (sink, writer) = sink(Verbosity::Normal);
        failing_run(&sink);

        assert_eq!(output(&writer), "");
    }

    #[test]
    fn quiet_output_is_silent() {
        let (sink, writer) = sink(Verbosity::Quiet);
        failing_run(&sink);
        sink.on_event(RunEvent::SpawnFailed {
            index: 0,
            name: "install".to_string(),
            error: "could not start 'bundle': not found".to_string(),
        });

        assert_eq!(output(&writer), "");
    }

    #[test]
    fn verbose_output_for_failing_run() {
        let (sink, writer) = sink(Verbosity::Verbose);
        failing_run(&sink);

        insta::assert_snapshot!(output(&writer).trim_end(), @r"
        [DEPLOY] Running 2 steps
        [..] [1/2] install: bundle install
        [OK] install
        [..] [2/2] migrate: bundle exec rake db:migrate
        [FAIL] migrate failed (exit 1)
        [FAIL] Deploy failed with exit 1
        ");
    }

    #[test]
    fn debug_output_includes_durations() {
        let (sink, writer) = sink(Verbosity::Debug);
        failing_run(&sink);

        assert!(output(&writer).contains("[OK] install (1.2s)"));
    }

    #[test]
    fn verbose_failure_lists_skipped_steps() {
        let (sink, writer) = sink(Verbosity::Verbose);
        sink.on_event(RunEvent::Completed {
            exit_code: 127,
            ran: 1,
            skipped: vec!["precompile".to_string(), "clean".to_string()],
        });

        assert_eq!(
            output(&writer),
            "[FAIL] Deploy failed with exit 127; skipped: precompile, clean\n"
        );
    }

    #[test]
    fn verbose_shows_spawn_failure() {
        let (sink, writer) = sink(Verbosity::Verbose);
        sink.on_event(RunEvent::SpawnFailed {
            index: 0,
            name: "install".to_string(),
            error: "could not start 'bundle': not found".to_string(),
        });

        assert_eq!(
            output(&writer),
            "[FAIL] could not start 'bundle': not found\n"
        );
    }

    #[test]
    fn dry_run_lists_plan_at_normal_without_completion_banner() {
        let (sink, writer) = sink(Verbosity::Normal);
        sink.on_event(RunEvent::Started {
            step_count: 1,
            dry_run: true,
        });
        sink.on_event(RunEvent::StepPlanned {
            index: 0,
            name: "install".to_string(),
            command: "bundle install".to_string(),
        });
        sink.on_event(RunEvent::Completed {
            exit_code: 0,
            ran: 0,
            skipped: vec!["install".to_string()],
        });

        assert_eq!(
            output(&writer),
            "[DEPLOY] Dry run 1 step\n[ ] [1/1] install: bundle install\n"
        );
    }

    #[test]
    fn unicode_icons_when_enabled() {
        let writer = TestWriter(Arc::default());
        let style = ConsoleStyle {
            verbosity: Verbosity::Verbose,
            ..ConsoleStyle::default()
        };
        let sink = ConsoleEventSink::with_writer(writer.clone(), style);

        sink.on_event(RunEvent::Interrupted { index: 1 });

        assert_eq!(output(&writer), "⚠ Interrupted before step 2\n");
    }

    #[test]
    fn format_duration_ranges() {
        assert_eq!(format_duration(850), "850ms");
        assert_eq!(format_duration(1_240), "1.2s");
        assert_eq!(format_duration(123_000), "2m 03s");
    }
}
