//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod exec;
pub mod export;
pub mod get;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::{ExitCode, Result};

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// Returns the process exit code on success. Only `exec` can succeed with a
/// non-zero code, forwarding the child's.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Export(args) => export::run(&args).map(|()| ExitCode::SUCCESS),
        Commands::Get(args) => get::run(&args).map(|()| ExitCode::SUCCESS),
        Commands::Exec(args) => exec::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(ExitCode::SUCCESS)
        }
    }
}
