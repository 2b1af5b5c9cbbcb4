use deploy_runner::RunnerError;

/// Render a setup error (config, plan) for stderr, with a fix hint when one is known.
pub fn format_error(err: &anyhow::Error, unicode: bool) -> String {
    let icon = if unicode { "✗" } else { "[FAIL]" };
    let mut out = format!("{} Error: {:#}", icon, err);

    if let Some(hint) = err.downcast_ref::<RunnerError>().and_then(hint_for) {
        out.push_str("\n  ");
        out.push_str(if unicode { "↳ " } else { "-> " });
        out.push_str(hint);
    }
    out
}

fn hint_for(err: &RunnerError) -> Option<&'static str> {
    match err {
        RunnerError::EmptyPlan { .. } => {
            Some("Remove the `steps` key to use the built-in plan, or add at least one [[steps]] entry.")
        }
        RunnerError::InvalidStep { .. } => {
            Some("Each [[steps]] entry needs either `program` (with optional `args`) or `command`.")
        }
        RunnerError::Config { .. } | RunnerError::Io(_) => None,
    }
}
