//! deploy-runner CLI
//!
//! Usage: deploy-runner [OPTIONS]
//!
//! Runs install, precompile, clean and migrate in order. Exits 0 when all
//! succeed, otherwise with the first failing step's exit code.

mod commands;
mod ui;

use clap::Parser;
use deploy_runner::presentation::Cli;

/// Exit code for configuration and setup errors, reported before any step runs
const SETUP_ERROR_EXIT: i32 = 2;

fn main() {
    let cli = Cli::parse();

    match commands::run::cmd_run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let unicode = ui::terminal::detect_capabilities().supports_unicode;
            eprintln!("{}", ui::error::format_error(&err, unicode));
            std::process::exit(SETUP_ERROR_EXIT);
        }
    }
}

