//! Output Rendering

use crate::domain::entities::StepPlan;

/// Render the plan for `--list`: one numbered step per line,
/// names padded so commands line up.
pub fn render_plan(plan: &StepPlan) -> String {
    let width = plan.iter().map(|s| s.name().len()).max().unwrap_or(0);

    let mut out = String::new();
    for (i, step) in plan.iter().enumerate() {
        out.push_str(&format!(
            "{}. {:<width$}  {}\n",
            i + 1,
            step.name(),
            step.command_line(),
            width = width
        ));
    }
    out
}

/// Render the plan for `--list --json`
pub fn render_plan_json(plan: &StepPlan) -> serde_json::Value {
    serde_json::json!({
        "event": "plan",
        "command": "deploy",
        "steps": plan.steps(),
    })
}
