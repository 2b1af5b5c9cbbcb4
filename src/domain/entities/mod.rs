//! Domain Entities
//!
//! - `Step` - One external command invocation
//! - `StepPlan` - The ordered list of steps for one run

mod plan;
mod step;

pub use plan::StepPlan;
pub use step::Step;
