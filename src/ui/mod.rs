//! Terminal-facing helpers for the deploy-runner binary.

pub mod context;
pub mod error;
pub mod terminal;
pub mod warnings;
