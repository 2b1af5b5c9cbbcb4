//! Deploy Options

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Options for the deploy use case
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Report the plan without executing anything
    pub dry_run: bool,
    /// Set by the Ctrl+C handler; checked before each step starts
    pub interrupt: Option<Arc<AtomicBool>>,
}

impl DeployOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }
}
