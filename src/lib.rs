//! `yamlenv` - Flatten hierarchical YAML configuration into environment variables
//!
//! ```no_run
//! use yamlenv::config::ConfigStore;
//!
//! let mut config = ConfigStore::from_file("config.yml")?;
//! config.export_all()?;
//! let url = config.var_or("DATABASE_URL", "sqlite::memory:");
//! # Ok::<(), yamlenv::error::ConfigError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;

pub use config::{ConfigMap, ConfigStore, ConfigValue, EnvStore, MemoryEnv, ProcessEnv};
pub use error::{ConfigError, EnvError};
