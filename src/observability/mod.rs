//! Observability module
//!
//! Logging setup for the `yamlenv` command-line front end.

pub mod logging;

pub use logging::{LogFormat, init_logging};
