//! CLI Argument Parsing
//!
//! With no arguments the runner executes the plan. Every flag is optional
//! and only changes reporting, never which steps run or their order.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// deploy-runner - install, precompile, clean and migrate, stopping at the first failure
#[derive(Parser, Debug)]
#[command(name = "deploy-runner")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Exit status is 0 when every step succeeds, otherwise the failing step's own exit code."
)]
pub struct Cli {
    /// Emit NDJSON events on stdout (step output goes to stderr)
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Show progress and a summary (-v); add step durations (-vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Print nothing besides the steps' own output, even for --dry-run
    #[arg(short, long)]
    pub quiet: bool,

    /// Show what would run without executing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the resolved step plan and exit
    #[arg(long, conflicts_with = "dry_run")]
    pub list: bool,

    /// Config file (default: ./deploy-runner.toml, then the user config)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_arguments() {
        let cli = Cli::try_parse_from(["deploy-runner"]).unwrap();
        assert!(!cli.json);
        assert!(!cli.dry_run);
        assert!(!cli.list);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.color, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["deploy-runner", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["deploy-runner", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_cli_list_conflicts_with_dry_run() {
        assert!(Cli::try_parse_from(["deploy-runner", "--list", "--dry-run"]).is_err());
    }

    #[test]
    fn test_cli_color_and_config() {
        let cli = Cli::try_parse_from([
            "deploy-runner",
            "--color",
            "never",
            "--config",
            "ci/deploy.toml",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert_eq!(cli.config, Some(PathBuf::from("ci/deploy.toml")));
        assert!(cli.json);
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["deploy-runner", "migrate"]).is_err());
    }
}
