//! Exit Status Value Object
//!
//! Normalizes how a step ended into a single shell-style exit code.

use std::fmt;
use std::io;

/// Exit code of a finished step, normalized to shell conventions.
///
/// - Normal exit: the process's own code
/// - Killed by signal N: `128 + N`
/// - Program not found: `127`
/// - Program found but not executable: `126`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitStatus(i32);

impl ExitStatus {
    pub const SUCCESS: Self = Self(0);
    pub const NOT_EXECUTABLE: Self = Self(126);
    pub const NOT_FOUND: Self = Self(127);
    /// `128 + SIGINT`
    pub const INTERRUPTED: Self = Self(130);

    const SIGNAL_BASE: i32 = 128;

    pub fn from_code(code: i32) -> Self {
        Self(code)
    }

    pub fn from_signal(signal: i32) -> Self {
        Self(Self::SIGNAL_BASE + signal)
    }

    /// Map a finished child process to a shell-style exit code.
    pub fn from_process(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::from_signal(signal);
            }
        }

        // No code and no signal: report a generic failure.
        Self(1)
    }

    /// Map a failure to start the child the way a POSIX shell does.
    pub fn from_spawn_error(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NOT_FOUND,
            _ => Self::NOT_EXECUTABLE,
        }
    }

    pub fn code(self) -> i32 {
        self.0
    }

    pub fn success(self) -> bool {
        self.0 == 0
    }
}

impl Default for ExitStatus {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}
