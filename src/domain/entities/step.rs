//! Step Entity
//!
//! A single external command invocation (e.g. `bundle install`).

use serde::Serialize;

/// One external command, run by name from `PATH` in the current directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    name: String,
    program: String,
    args: Vec<String>,
}

impl Step {
    pub fn new(name: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Human label, e.g. `migrate`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program and arguments joined for display.
    ///
    /// Not shell-quoted; intended for humans and logs only.
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            return self.program.clone();
        }
        format!("{} {}", self.program, self.args.join(" "))
    }
}
