use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use deploy_runner::config::{ColorMode, Config, Verbosity};
use deploy_runner::infrastructure::ConsoleStyle;
use deploy_runner::presentation::{Cli, ColorWhen};

/// Output decisions for one invocation: CLI flags over config over terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(cli: &Cli, config: &Config) -> Self {
        Self::from_caps(
            cli.json,
            cli.verbose,
            cli.quiet,
            cli.color,
            config,
            detect_capabilities(),
        )
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        quiet: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else {
            config.output.verbosity.raised_by(verbose)
        };

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json: json || config.output.json,
            verbosity,
            color,
            unicode: config.output.unicode && caps.supports_unicode,
        }
    }

    pub fn console_style(&self) -> ConsoleStyle {
        ConsoleStyle {
            color: self.color,
            unicode: self.unicode,
            verbosity: self.verbosity,
        }
    }
}
