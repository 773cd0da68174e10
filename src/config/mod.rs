//! Configuration module
//!
//! Loads hierarchical YAML configuration and flattens it into environment
//! variables through a [`ConfigStore`].

pub mod env;
pub mod loader;
pub mod store;
pub mod value;

pub use env::{EnvStore, MemoryEnv, ProcessEnv};
pub use loader::{DEFAULT_CONFIG_PATH, load_file, parse_str};
pub use store::{ConfigStore, flatten, var_name};
pub use value::{ConfigMap, ConfigValue};
