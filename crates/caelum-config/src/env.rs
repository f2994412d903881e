use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in raw config text
///
/// `{{ env.VAR | default("fallback") }}` substitutes the fallback when
/// the variable is unset. Expansion happens before TOML parsing so the
/// config structs hold plain `String`/`SecretString` values. TOML
/// comment lines are left untouched.
pub fn expand_env(input: &str) -> Result<String, String> {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let placeholder = PLACEHOLDER.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    });

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;
        for captures in placeholder.captures_iter(line) {
            let matched = captures.get(0).expect("group 0 always present");
            let var_name = &captures[1];
            output.push_str(&line[last_end..matched.start()]);

            match std::env::var(var_name) {
                Ok(value) => output.push_str(&value),
                Err(_) => match captures.get(2) {
                    Some(default) => output.push_str(default.as_str()),
                    None => return Err(format!("environment variable not found: `{var_name}`")),
                },
            }

            last_end = matched.end();
        }
        output.push_str(&line[last_end..]);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
