//! `get` command
//!
//! Exports a configuration file into the process environment and prints a
//! single variable read back from it.

use crate::cli::args::GetArgs;
use crate::config::ConfigStore;
use crate::error::{Result, YamlEnvError};

/// Print one variable after exporting the configuration.
///
/// # Errors
///
/// Returns a config error if the file cannot be loaded or exported, or
/// [`YamlEnvError::VarNotSet`] if the variable is absent and no default was
/// given.
pub fn run(args: &GetArgs) -> Result<()> {
    tracing::info!(config = %args.source.config.display(), "loading configuration");
    let mut store = ConfigStore::from_file(&args.source.config)?;
    store.export_all()?;

    let value = match (store.var(&args.name), &args.default) {
        (Some(value), _) => value,
        (None, Some(default)) => default.clone(),
        (None, None) => {
            return Err(YamlEnvError::VarNotSet {
                name: args.name.clone(),
            });
        }
    };

    println!("{value}");
    Ok(())
}
