//! Command entry points for the deploy-runner binary.

pub mod run;
