//! The run command: resolve config and plan, then execute fail-fast.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use deploy_runner::config::Config;
use deploy_runner::presentation::output::{render_plan, render_plan_json};
use deploy_runner::presentation::{create_deploy_use_case, create_event_sink, Cli};
use deploy_runner::{DeployOptions, StepPlan};

use crate::ui::context::UiContext;
use crate::ui::warnings::print_config_warnings;

/// Run entry point. Returns the process exit code.
pub fn cmd_run(cli: &Cli) -> Result<i32> {
    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let loaded = Config::load_layered(cli.config.as_deref(), &cwd)?;
    print_config_warnings(&loaded.warnings);

    let ui = UiContext::new(cli, &loaded.config);
    let plan = StepPlan::from_config(&loaded.config)?;

    if cli.list {
        if ui.json {
            println!("{}", render_plan_json(&plan));
        } else {
            print!("{}", render_plan(&plan));
        }
        return Ok(0);
    }

    let interrupt = install_interrupt_handler()?;
    let options = DeployOptions::new()
        .with_dry_run(cli.dry_run)
        .with_interrupt(interrupt);

    let use_case = create_deploy_use_case(ui.json);
    let events = create_event_sink(ui.json, ui.console_style());
    let report = use_case.execute_with_events(&plan, &options, events);

    Ok(report.exit_code())
}

/// The child gets SIGINT from the terminal on its own; the runner only
/// records it so no further step starts.
fn install_interrupt_handler() -> Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = flag.clone();

    ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    Ok(flag)
}
