use deploy_runner::config::ConfigWarning;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for line in render_config_warnings(warnings) {
        eprintln!("{}", line);
    }
}

fn render_config_warnings(warnings: &[ConfigWarning]) -> Vec<String> {
    let mut lines = Vec::new();
    for w in warnings {
        match w {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                match line {
                    Some(line) => lines.push(format!(
                        "⚠ Unknown config key '{}' in {}:{}",
                        key,
                        file.display(),
                        line
                    )),
                    None => lines.push(format!(
                        "⚠ Unknown config key '{}' in {}",
                        key,
                        file.display()
                    )),
                }

                if let Some(suggestion) = suggestion {
                    lines.push(format!("   Did you mean '{}'?", suggestion));
                }
            }
            ConfigWarning::InvalidEnvValue {
                var,
                value,
                expected,
            } => {
                lines.push(format!("⚠ Ignoring {}={:?}", var, value));
                lines.push(format!("   Expected one of: {}", expected));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn renders_line_and_suggestion() {
        let lines = render_config_warnings(&[ConfigWarning::UnknownKey {
            key: "progam".to_string(),
            file: PathBuf::from("deploy-runner.toml"),
            line: Some(4),
            suggestion: Some("program".to_string()),
        }]);

        assert_eq!(
            lines,
            [
                "⚠ Unknown config key 'progam' in deploy-runner.toml:4",
                "   Did you mean 'program'?",
            ]
        );
    }

    #[test]
    fn renders_without_line() {
        let lines = render_config_warnings(&[ConfigWarning::UnknownKey {
            key: "x".to_string(),
            file: PathBuf::from("a.toml"),
            line: None,
            suggestion: None,
        }]);

        assert_eq!(lines, ["⚠ Unknown config key 'x' in a.toml"]);
    }

    #[test]
    fn renders_invalid_env_value() {
        let lines = render_config_warnings(&[ConfigWarning::InvalidEnvValue {
            var: "DEPLOY_RUNNER_COLOR".to_string(),
            value: "sometimes".to_string(),
            expected: "auto, always or never",
        }]);

        assert_eq!(
            lines,
            [
                "⚠ Ignoring DEPLOY_RUNNER_COLOR=\"sometimes\"",
                "   Expected one of: auto, always or never",
            ]
        );
    }
}
