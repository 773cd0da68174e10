//! `exec` command
//!
//! Exports a configuration file into the process environment and runs a
//! child command, which inherits the exported variables.

use std::process::{Command, ExitStatus};

use crate::cli::args::ExecArgs;
use crate::config::ConfigStore;
use crate::error::{ExitCode, Result, YamlEnvError};

/// Run a command with the configuration exported.
///
/// Returns the child's exit code.
///
/// # Errors
///
/// Returns a config error if the file cannot be loaded or exported, or an
/// I/O error if the command cannot be spawned.
pub fn run(args: &ExecArgs) -> Result<i32> {
    let Some((program, rest)) = args.command.split_first() else {
        return Err(YamlEnvError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "a command to run is required",
        )));
    };

    tracing::info!(config = %args.source.config.display(), "loading configuration");
    let mut store = ConfigStore::from_file(&args.source.config)?;
    store.export_all()?;

    tracing::info!(%program, "running command");
    let status = Command::new(program).args(rest).status()?;
    tracing::debug!(%status, "command finished");
    Ok(exit_code_of(status))
}

/// Maps a child's exit status to this process's exit code.
///
/// A child killed by a signal maps to `128 + signal`, as shells report it.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    ExitCode::ERROR
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::process::ExitStatusExt;

    use super::*;

    #[test]
    fn exit_code_passes_through() {
        assert_eq!(exit_code_of(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code_of(ExitStatus::from_raw(3 << 8)), 3);
    }

    #[test]
    fn signal_maps_to_128_plus_signal() {
        // raw wait status 9 = killed by SIGKILL
        assert_eq!(exit_code_of(ExitStatus::from_raw(9)), 137);
    }
}
