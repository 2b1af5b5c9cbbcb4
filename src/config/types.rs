//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::Step;
use crate::error::{RunnerError, RunnerResult};

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Emit NDJSON events on stdout instead of console progress
    #[serde(default)]
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
            json: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Apply `-v` occurrences on top of a base level.
    pub fn raised_by(self, count: u8) -> Self {
        match (self as u8).saturating_add(count) {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// One `[[steps]]` entry.
///
/// Either `program` (+ optional `args`) or a whitespace-split `command`:
///
/// ```toml
/// [[steps]]
/// name = "install"
/// program = "bundle"
/// args = ["install"]
///
/// [[steps]]
/// name = "migrate"
/// command = "bundle exec rake db:migrate"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepConfig {
    /// Defaults to the program name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl StepConfig {
    /// Convert to a domain step. `index` is 1-based, for error messages.
    pub fn to_step(&self, index: usize) -> RunnerResult<Step> {
        let invalid = |reason: &str| RunnerError::InvalidStep {
            index,
            reason: reason.to_string(),
        };

        let (program, args) = match (&self.program, &self.command) {
            (Some(_), Some(_)) => {
                return Err(invalid("set either `program` or `command`, not both"));
            }
            (None, None) => return Err(invalid("missing `program` or `command`")),
            (Some(program), None) => (program.clone(), self.args.clone()),
            (None, Some(command)) => {
                if !self.args.is_empty() {
                    return Err(invalid("`args` cannot be combined with `command`"));
                }
                let mut parts = command.split_whitespace().map(str::to_string);
                let program = parts.next().ok_or_else(|| invalid("`command` is empty"))?;
                (program, parts.collect())
            }
        };

        let name = self.name.clone().unwrap_or_else(|| program.clone());
        Ok(Step::new(name, program).with_args(args))
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    /// Replaces the built-in plan when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StepConfig>>,

    /// File the `steps` list came from
    #[serde(skip)]
    pub steps_origin: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RunnerResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RunnerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the config file for a run and apply environment overrides.
    ///
    /// `explicit` must exist when given. Otherwise the project file in
    /// `project_dir` wins over the user file; with neither, defaults apply.
    pub fn load_layered(explicit: Option<&Path>, project_dir: &Path) -> RunnerResult<LoadedConfig> {
        loader::load_layered(explicit, project_dir, loader::user_config_dir().as_deref())
    }

    /// Apply environment variable overrides (DEPLOY_RUNNER_* prefix)
    pub fn with_env_overrides(self) -> (Self, Vec<ConfigWarning>) {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
