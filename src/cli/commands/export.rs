//! `export` command
//!
//! Flattens a configuration file into an in-memory environment and prints
//! it, leaving the process environment untouched.

use std::io::Write;

use indexmap::IndexMap;

use crate::cli::args::{ExportArgs, ExportFormat};
use crate::config::{ConfigStore, MemoryEnv};
use crate::error::{Result, YamlEnvError};

/// Print the variables a configuration file flattens to.
///
/// # Errors
///
/// Returns a config error if the file cannot be loaded or a variable cannot
/// be represented, or an I/O error if stdout is closed.
pub fn run(args: &ExportArgs) -> Result<()> {
    tracing::info!(config = %args.source.config.display(), "loading configuration");
    let mut store = ConfigStore::from_file_with_env(&args.source.config, MemoryEnv::new())?;
    store.export_all()?;

    let rendered = render(store.env(), args.format)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Renders an environment in the requested format.
///
/// Shell and dotenv output quote values with POSIX shell rules and end every
/// line with a newline; JSON output is one object in write order.
///
/// # Errors
///
/// Returns [`YamlEnvError::InvalidShellName`] if a shell or dotenv line would
/// carry a name outside `[A-Za-z_][A-Za-z0-9_]*`, [`YamlEnvError::Quote`] if a
/// value cannot be shell-quoted, or [`YamlEnvError::Json`] if serialization
/// fails.
pub fn render(env: &MemoryEnv, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Shell => render_lines(env, "export "),
        ExportFormat::Dotenv => render_lines(env, ""),
        ExportFormat::Json => {
            let vars: IndexMap<&str, &str> = env.iter().collect();
            let mut json = serde_json::to_string_pretty(&vars)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_lines(env: &MemoryEnv, prefix: &str) -> Result<String> {
    let mut out = String::new();
    for (name, value) in env.iter() {
        if !is_shell_name(name) {
            return Err(YamlEnvError::InvalidShellName {
                name: name.to_string(),
            });
        }
        let quoted = shlex::try_quote(value).map_err(|source| YamlEnvError::Quote {
            name: name.to_string(),
            source,
        })?;
        out.push_str(prefix);
        out.push_str(name);
        out.push('=');
        out.push_str(&quoted);
        out.push('\n');
    }
    Ok(out)
}

/// Names a POSIX shell accepts on the left of an assignment.
fn is_shell_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> MemoryEnv {
        [
            ("BOOL", "false"),
            ("SEQUENCE", "item1 item2 item3"),
            ("QUOTE", "it's"),
            ("EMPTY", ""),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn shell_format_quotes_values() {
        let out = render(&env(), ExportFormat::Shell).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "export BOOL=false");
        assert_eq!(
            shlex::split(lines[1]).unwrap(),
            ["export", "SEQUENCE=item1 item2 item3"]
        );
        assert_ne!(lines[2], "export QUOTE=it's");
        assert_eq!(shlex::split(lines[3]).unwrap(), ["export", "EMPTY="]);
    }

    #[test]
    fn dotenv_format_has_no_prefix() {
        let out = render(&env(), ExportFormat::Dotenv).unwrap();
        assert!(out.starts_with("BOOL=false\n"));
        assert!(out.ends_with('\n'));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn json_format_keeps_write_order() {
        let out = render(&env(), ExportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["SEQUENCE"], "item1 item2 item3");
        assert!(out.find("BOOL").unwrap() < out.find("SEQUENCE").unwrap());
        assert!(out.find("SEQUENCE").unwrap() < out.find("QUOTE").unwrap());
    }

    #[test]
    fn hyphenated_name_is_rejected() {
        let env: MemoryEnv = [("LOG-LEVEL", "info")].into_iter().collect();
        for format in [ExportFormat::Shell, ExportFormat::Dotenv] {
            let err = render(&env, format).unwrap_err();
            assert!(
                matches!(err, YamlEnvError::InvalidShellName { ref name } if name == "LOG-LEVEL")
            );
        }
    }

    #[test]
    fn name_with_shell_metacharacters_is_rejected() {
        let env: MemoryEnv = [("X;:>PWNED;Y", "1")].into_iter().collect();
        let err = render(&env, ExportFormat::Shell).unwrap_err();
        assert!(matches!(err, YamlEnvError::InvalidShellName { .. }));
    }

    #[test]
    fn json_format_keeps_any_name() {
        let env: MemoryEnv = [("LOG-LEVEL", "info")].into_iter().collect();
        let out = render(&env, ExportFormat::Json).unwrap();
        assert!(out.contains("\"LOG-LEVEL\": \"info\""));
    }

    #[test]
    fn shell_name_rules() {
        for ok in ["A", "_A", "MAPPING_KEY1", "A1"] {
            assert!(is_shell_name(ok), "{ok} should be accepted");
        }
        for bad in ["", "1A", "A-B", "A B", "A;B", "$(X)", "É"] {
            assert!(!is_shell_name(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn empty_environment_renders_nothing() {
        assert_eq!(render(&MemoryEnv::new(), ExportFormat::Shell).unwrap(), "");
    }

    #[test]
    fn shell_output_round_trips_through_shlex() {
        let env = env();
        let out = render(&env, ExportFormat::Dotenv).unwrap();
        for (line, (name, value)) in out.lines().zip(env.iter()) {
            let words = shlex::split(line).unwrap();
            assert_eq!(words, [format!("{name}={value}")]);
        }
    }
}
