//! Deploy Use Case
//!
//! Orchestrates a run:
//! 1. Announce the plan
//! 2. Execute each step through the executor, in order
//! 3. Stop at the first non-zero status or an operator interrupt
//! 4. Report what ran and what was skipped
//!
//! No retry and no rollback: effects of steps that already ran stay in place.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use crate::domain::entities::StepPlan;
use crate::domain::ports::{CommandExecutor, NoopEventSink, RunEvent, RunEventSink};

use super::options::DeployOptions;
use super::result::{RunReport, StepOutcome};

/// Deploy use case, parameterized by its executor port.
pub struct DeployUseCase<E>
where
    E: CommandExecutor,
{
    executor: E,
}

impl<E> DeployUseCase<E>
where
    E: CommandExecutor,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Execute the plan silently
    pub fn execute(&self, plan: &StepPlan, options: &DeployOptions) -> RunReport {
        self.execute_with_events(plan, options, Arc::new(NoopEventSink))
    }

    /// Execute the plan, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        plan: &StepPlan,
        options: &DeployOptions,
        events: Arc<dyn RunEventSink>,
    ) -> RunReport {
        events.on_event(RunEvent::Started {
            step_count: plan.len(),
            dry_run: options.dry_run,
        });

        let report = if options.dry_run {
            self.plan_only(plan, &events)
        } else {
            self.run_steps(plan, options, &events)
        };

        events.on_event(RunEvent::Completed {
            exit_code: report.exit_code(),
            ran: report.outcomes.len(),
            skipped: report.skipped.clone(),
        });

        report
    }

    fn plan_only(&self, plan: &StepPlan, events: &Arc<dyn RunEventSink>) -> RunReport {
        for (index, step) in plan.iter().enumerate() {
            events.on_event(RunEvent::StepPlanned {
                index,
                name: step.name().to_string(),
                command: step.command_line(),
            });
        }

        RunReport {
            skipped: plan.iter().map(|s| s.name().to_string()).collect(),
            dry_run: true,
            ..RunReport::new()
        }
    }

    fn run_steps(
        &self,
        plan: &StepPlan,
        options: &DeployOptions,
        events: &Arc<dyn RunEventSink>,
    ) -> RunReport {
        let mut report = RunReport::new();
        let steps = plan.steps();

        for (index, step) in steps.iter().enumerate() {
            if is_interrupted(options) {
                events.on_event(RunEvent::Interrupted { index });
                report.interrupted = true;
                report.skipped = names_from(plan, index);
                return report;
            }

            events.on_event(RunEvent::StepStarted {
                index,
                name: step.name().to_string(),
                command: step.command_line(),
            });

            let started = Instant::now();
            let status = match self.executor.execute(step) {
                Ok(status) => status,
                Err(err) => {
                    events.on_event(RunEvent::SpawnFailed {
                        index,
                        name: step.name().to_string(),
                        error: err.to_string(),
                    });
                    err.status
                }
            };
            let duration = started.elapsed();

            events.on_event(RunEvent::StepFinished {
                index,
                name: step.name().to_string(),
                exit_code: status.code(),
                duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            });

            report.outcomes.push(StepOutcome {
                name: step.name().to_string(),
                status,
                duration,
            });

            if !status.success() {
                report.failed = Some(index);
                report.interrupted = is_interrupted(options);
                report.skipped = names_from(plan, index + 1);
                return report;
            }
        }

        report
    }
}

fn is_interrupted(options: &DeployOptions) -> bool {
    options
        .interrupt
        .as_ref()
        .is_some_and(|flag| flag.load(Ordering::SeqCst))
}

fn names_from(plan: &StepPlan, start: usize) -> Vec<String> {
    plan.steps()[start..]
        .iter()
        .map(|s| s.name().to_string())
        .collect()
}
