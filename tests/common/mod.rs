//! Common test utilities for deploy-runner CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and config directories plus a runner for the binary
//! - Fixtures: Step scripts and config builders

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
