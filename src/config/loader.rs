//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RunnerError, RunnerResult};

use super::types::{ColorMode, Config, Verbosity};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "deploy-runner.toml";

const USER_CONFIG_DIR: &str = "deploy-runner";
const USER_CONFIG_FILE: &str = "config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key in a config file that nothing reads
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// A `DEPLOY_RUNNER_*` value that is not recognized; the file value stays
    InvalidEnvValue {
        var: String,
        value: String,
        expected: &'static str,
    },
}

/// Config resolved for a run, with the file it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// None when only built-in defaults apply
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RunnerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| RunnerError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RunnerError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.steps.is_some() {
        config.steps_origin = Some(path.to_path_buf());
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file for a run, load it, then apply env overrides.
pub fn load_layered(
    explicit: Option<&Path>,
    project_dir: &Path,
    user_dir: Option<&Path>,
) -> RunnerResult<LoadedConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(RunnerError::Config {
                    file: path.to_path_buf(),
                    message: "file not found".to_string(),
                });
            }
            Some(path.to_path_buf())
        }
        None => discover(project_dir, user_dir),
    };

    let (config, mut warnings) = match &path {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    let (config, env_warnings) = config.with_env_overrides();
    warnings.extend(env_warnings);

    Ok(LoadedConfig {
        config,
        path,
        warnings,
    })
}

fn discover(project_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let project_config = project_dir.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return Some(project_config);
    }

    let user_config = user_dir?.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
    user_config.is_file().then_some(user_config)
}

/// Apply environment variable overrides (DEPLOY_RUNNER_* prefix).
///
/// Unrecognized values leave the file setting in place and produce a warning.
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();
    let mut invalid = |var: &str, value: String, expected: &'static str| {
        warnings.push(ConfigWarning::InvalidEnvValue {
            var: var.to_string(),
            value,
            expected,
        });
    };

    if let Some(value) = get_env("DEPLOY_RUNNER_VERBOSITY") {
        match parse_verbosity(&value) {
            Some(verbosity) => config.output.verbosity = verbosity,
            None => invalid(
                "DEPLOY_RUNNER_VERBOSITY",
                value,
                "quiet, normal, verbose or debug",
            ),
        }
    }

    if let Some(value) = get_env("DEPLOY_RUNNER_COLOR") {
        match parse_color(&value) {
            Some(color) => config.output.color = color,
            None => invalid("DEPLOY_RUNNER_COLOR", value, "auto, always or never"),
        }
    }

    if let Some(value) = get_env("DEPLOY_RUNNER_JSON") {
        match parse_bool(&value) {
            Some(json) => config.output.json = json,
            None => invalid("DEPLOY_RUNNER_JSON", value, "1, true, 0 or false"),
        }
    }

    (config, warnings)
}

fn parse_verbosity(value: &str) -> Option<Verbosity> {
    match value.trim().to_lowercase().as_str() {
        "quiet" => Some(Verbosity::Quiet),
        "normal" => Some(Verbosity::Normal),
        "verbose" => Some(Verbosity::Verbose),
        "debug" => Some(Verbosity::Debug),
        _ => None,
    }
}

fn parse_color(value: &str) -> Option<ColorMode> {
    match value.trim().to_lowercase().as_str() {
        "auto" => Some(ColorMode::Auto),
        "always" => Some(ColorMode::Always),
        "never" => Some(ColorMode::Never),
        _ => None,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" | "" => Some(false),
        _ => None,
    }
}

/// User config directory (`$XDG_CONFIG_HOME`, else the platform default)
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// 1-based line of the first `key = ...` assignment
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "verbosity",
        "color",
        "unicode",
        "json",
        "steps",
        "name",
        "program",
        "args",
        "command",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
