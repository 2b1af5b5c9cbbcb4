//! Domain Layer
//!
//! The core of deploy-runner: steps, plans and exit statuses, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Step, StepPlan)
//! - `value_objects/` - Immutable value types (ExitStatus)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or writes output directly
//! 2. **Ports & Adapters** - Process execution and reporting go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
