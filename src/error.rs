//! Error types for `yamlenv`
//!
//! `ConfigError` covers the library surface (loading and exporting a
//! [`ConfigStore`](crate::config::ConfigStore)), `EnvError` covers writes into
//! an environment namespace, and `YamlEnvError` aggregates both for the CLI.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `yamlenv` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error (including a requested variable that is not set)
    pub const ERROR: i32 = 1;

    /// Configuration error (missing file, invalid YAML, rejected export)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (stdout closed, child process could not be spawned)
    pub const IO_ERROR: i32 = 3;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `yamlenv` CLI operations.
///
/// Aggregates the library errors with the failures that only the
/// command-line front end can produce.
#[derive(Debug, Error)]
pub enum YamlEnvError {
    /// Configuration loading or export error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value could not be quoted for the requested shell format
    #[error("cannot quote value of '{name}': {source}")]
    Quote {
        /// Variable whose value failed to quote
        name: String,
        /// Underlying quoting error
        #[source]
        source: shlex::QuoteError,
    },

    /// A variable name cannot be assigned in shell or dotenv syntax
    #[error("'{name}' is not a valid shell variable name")]
    InvalidShellName {
        /// Name as flattened from the configuration
        name: String,
    },

    /// Requested variable is absent and no default was given
    #[error("environment variable '{name}' is not set")]
    VarNotSet {
        /// Name that was looked up
        name: String,
    },
}

impl YamlEnvError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Quote { .. } | Self::InvalidShellName { .. } => {
                ExitCode::CONFIG_ERROR
            }
            Self::Io(_) | Self::Json(_) => ExitCode::IO_ERROR,
            Self::VarNotSet { .. } => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while loading a configuration store or exporting it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be opened or read
    #[error("config file not found: {}", .path.display())]
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The YAML parser rejected the document
    #[error("parse error in {}: {source}", .path.display())]
    Parse {
        /// Path of the document, or `<inline>` for in-memory text
        path: PathBuf,
        /// Parser error, kept intact
        #[source]
        source: serde_yaml::Error,
    },

    /// The environment namespace refused a write
    #[error(transparent)]
    Env(#[from] EnvError),
}

impl ConfigError {
    /// Returns the parser error if this is a parse failure.
    #[must_use]
    pub const fn as_parse_error(&self) -> Option<&serde_yaml::Error> {
        match self {
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Environment Errors
// ============================================================================

/// A write into an environment namespace was rejected.
///
/// Raised for inputs the platform environment cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// Variable name cannot be stored
    #[error("invalid environment variable name '{name}': {reason}")]
    InvalidName {
        /// Offending name
        name: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Variable value cannot be stored
    #[error("invalid value for environment variable '{name}': {reason}")]
    InvalidValue {
        /// Name the value was destined for
        name: String,
        /// What is wrong with it
        reason: &'static str,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `yamlenv` CLI operations.
pub type Result<T> = std::result::Result<T, YamlEnvError>;

// ============================================================================
// Tests
// ============================================================================
