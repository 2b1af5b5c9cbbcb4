//! Test fixtures - step scripts and config builders.

/// Log file every scripted step appends its name to
pub const STEP_LOG: &str = "steps.log";

/// Shell script that records `name` in the step log, then exits with `code`
pub fn logged_step(name: &str, code: i32) -> String {
    format!("echo {} >> {}; exit {}", name, STEP_LOG, code)
}

/// `[[steps]]` config running each script through `sh -c`
pub fn steps_toml<S: AsRef<str>>(steps: &[(&str, S)]) -> String {
    let mut out = String::new();
    for (name, script) in steps {
        let script = script.as_ref();
        out.push_str("[[steps]]\n");
        out.push_str(&format!("name = {:?}\n", name));
        out.push_str("program = \"sh\"\n");
        out.push_str(&format!("args = [\"-c\", {:?}]\n\n", script));
    }
    out
}

/// The four deploy steps, each logging its name; `fail` makes one step exit non-zero
pub fn deploy_steps(fail: Option<(&str, i32)>) -> Vec<(&'static str, String)> {
    ["install", "precompile", "clean", "migrate"]
        .into_iter()
        .map(|name| {
            let code = match fail {
                Some((failing, code)) if failing == name => code,
                _ => 0,
            };
            (name, logged_step(name, code))
        })
        .collect()
}

pub fn logged_names(log: &str) -> Vec<String> {
    log.lines().map(str::to_string).collect()
}
