//! Test environment builder for isolated deploy-runner testing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::steps_toml;

/// Result of running the deploy-runner binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// - `project_root` is the working directory for every run
/// - `config_home` stands in for `$XDG_CONFIG_HOME`, so no real user config leaks in
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_home: TempDir::new().expect("Failed to create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_deploy-runner")),
        }
    }

    /// Environment whose project config replaces the plan with `steps`
    pub fn with_steps<S: AsRef<str>>(steps: &[(&str, S)]) -> Self {
        let env = Self::new();
        env.write_project_file("deploy-runner.toml", &steps_toml(steps));
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a project file, or an empty string if it does not exist
    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path)).unwrap_or_default()
    }

    /// Write the user-level config (`$XDG_CONFIG_HOME/deploy-runner/config.toml`)
    pub fn write_user_config(&self, content: &str) {
        let dir = self.config_home.path().join("deploy-runner");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        std::fs::write(dir.join("config.toml"), content).expect("Failed to write user config");
    }

    /// Run the binary from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_with_env(cwd, args, &[])
    }

    /// Run with extra environment variables set on top of the isolated defaults
    pub fn run_with_env(&self, cwd: &Path, args: &[&str], vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env_remove("DEPLOY_RUNNER_VERBOSITY")
            .env_remove("DEPLOY_RUNNER_COLOR")
            .env_remove("DEPLOY_RUNNER_JSON")
            .envs(vars.iter().copied());

        let output = cmd.output().expect("Failed to execute deploy-runner");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
