//! Logging setup
//!
//! Everything `yamlenv` logs goes to stderr; stdout carries only command
//! output so `eval "$(yamlenv export)"` stays safe at any verbosity.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable holding an `EnvFilter` directive. When set and valid
/// it replaces the level chosen with `-v`.
pub const LOG_LEVEL_ENV: &str = "YAMLENV_LOG_LEVEL";

/// Log line rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Compact text without timestamps.
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

/// Level for a `-v` count: none is `warn`, then `info`, `debug`, `trace`.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter_for(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)))
}

fn ansi_enabled(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}

/// Installs the global subscriber.
///
/// A second call leaves the first subscriber in place.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Human => builder
            .without_time()
            .with_ansi(ansi_enabled(color))
            .try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
