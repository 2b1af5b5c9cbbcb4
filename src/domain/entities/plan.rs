//! Step Plan Entity
//!
//! The ordered list of steps for one run. Order is significant: steps run
//! first to last and the first failure ends the run.

use crate::config::Config;
use crate::error::{RunnerError, RunnerResult};

use super::step::Step;

/// Ordered, non-empty list of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPlan {
    steps: Vec<Step>,
}

impl StepPlan {
    /// Build a plan, rejecting empty lists and unusable steps.
    pub fn new(steps: Vec<Step>) -> RunnerResult<Self> {
        Self::with_origin(steps, "plan")
    }

    fn with_origin(steps: Vec<Step>, origin: &str) -> RunnerResult<Self> {
        if steps.is_empty() {
            return Err(RunnerError::EmptyPlan {
                origin: origin.to_string(),
            });
        }

        for (i, step) in steps.iter().enumerate() {
            if step.name().trim().is_empty() {
                return Err(RunnerError::InvalidStep {
                    index: i + 1,
                    reason: "name is empty".to_string(),
                });
            }
            if step.program().trim().is_empty() {
                return Err(RunnerError::InvalidStep {
                    index: i + 1,
                    reason: format!("step '{}' has an empty program", step.name()),
                });
            }
        }

        Ok(Self { steps })
    }

    /// The built-in web application deploy sequence:
    /// install, precompile, clean, migrate.
    pub fn builtin() -> Self {
        Self {
            steps: vec![
                Step::new("install", "bundle").with_args(["install"]),
                Step::new("precompile", "bundle").with_args([
                    "exec",
                    "rake",
                    "assets:precompile",
                ]),
                Step::new("clean", "bundle").with_args(["exec", "rake", "assets:clean"]),
                Step::new("migrate", "bundle").with_args(["exec", "rake", "db:migrate"]),
            ],
        }
    }

    /// Plan from the `[[steps]]` config section, or the built-in plan when
    /// no config layer declared one.
    pub fn from_config(config: &Config) -> RunnerResult<Self> {
        let Some(entries) = &config.steps else {
            return Ok(Self::builtin());
        };

        let origin = config
            .steps_origin
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "config".to_string());

        let steps = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.to_step(i + 1))
            .collect::<RunnerResult<Vec<_>>>()?;

        Self::with_origin(steps, &origin)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a constructed plan; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl Default for StepPlan {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a StepPlan {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
