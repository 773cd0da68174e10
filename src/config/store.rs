//! The configuration store
//!
//! [`ConfigStore`] owns a [`ConfigMap`] and projects it into an
//! [`EnvStore`]. The map is the source of truth for membership and
//! iteration; the environment is written on export and on every
//! [`ConfigStore::set`], and read by [`ConfigStore::var`].
//!
//! # Variable names
//!
//! A top-level key `key` exports as `KEY`. A key `child` inside a mapping
//! stored under `parent` exports as `PARENT_CHILD`. Only the immediate parent
//! contributes to the name, so `a: {b: {c: 1}}` exports `B_C=1`.

use std::path::Path;

use crate::config::env::{EnvStore, ProcessEnv};
use crate::config::loader::{self, DEFAULT_CONFIG_PATH};
use crate::config::value::{ConfigMap, ConfigValue};
use crate::error::ConfigError;

/// Hierarchical configuration bound to an environment namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigStore<E = ProcessEnv> {
    data: ConfigMap,
    env: E,
}

impl ConfigStore<ProcessEnv> {
    /// Wraps `data`, exporting into the process environment.
    #[must_use]
    pub const fn new(data: ConfigMap) -> Self {
        Self::with_env(data, ProcessEnv)
    }

    /// Loads `path`, exporting into the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not a YAML mapping.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_file_with_env(path, ProcessEnv)
    }

    /// Loads [`DEFAULT_CONFIG_PATH`] from the working directory.
    ///
    /// # Errors
    ///
    /// See [`ConfigStore::from_file`].
    pub fn from_default_file() -> Result<Self, ConfigError> {
        Self::from_file(DEFAULT_CONFIG_PATH)
    }
}

impl<E: EnvStore> ConfigStore<E> {
    /// Wraps `data`, exporting into `env`.
    #[must_use]
    pub const fn with_env(data: ConfigMap, env: E) -> Self {
        Self { data, env }
    }

    /// Loads `path`, exporting into `env`.
    ///
    /// # Errors
    ///
    /// See [`ConfigStore::from_file`].
    pub fn from_file_with_env(path: impl AsRef<Path>, env: E) -> Result<Self, ConfigError> {
        let data = loader::load_file(path.as_ref())?;
        Ok(Self::with_env(data, env))
    }

    /// Parses YAML text, exporting into `env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a YAML mapping.
    pub fn from_yaml_str(yaml: &str, env: E) -> Result<Self, ConfigError> {
        Ok(Self::with_env(loader::parse_str(yaml)?, env))
    }

    // ------------------------------------------------------------------------
    // Mapping access
    // ------------------------------------------------------------------------

    /// Returns `true` if `key` is a top-level key of the configuration.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns the configuration value stored under `key`.
    ///
    /// This reads the in-memory map; use [`ConfigStore::var`] to read the
    /// environment.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.data.get(key)
    }

    /// Top-level keys, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Top-level values, in document order.
    pub fn values(&self) -> impl Iterator<Item = &ConfigValue> {
        self.data.values()
    }

    /// Top-level entries, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the configuration has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The underlying configuration map.
    #[must_use]
    pub const fn data(&self) -> &ConfigMap {
        &self.data
    }

    /// The environment this store exports into.
    #[must_use]
    pub const fn env(&self) -> &E {
        &self.env
    }

    /// Splits the store into its map and environment.
    #[must_use]
    pub fn into_parts(self) -> (ConfigMap, E) {
        (self.data, self.env)
    }

    // ------------------------------------------------------------------------
    // Environment access
    // ------------------------------------------------------------------------

    /// Reads `name` from the environment, bypassing the configuration map.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<String> {
        self.env.get(name)
    }

    /// Reads `name` from the environment, falling back to `default`.
    #[must_use]
    pub fn var_or(&self, name: &str, default: impl Into<String>) -> String {
        self.var(name).unwrap_or_else(|| default.into())
    }

    /// Stores `value` under `key` and exports that entry immediately.
    ///
    /// The entry is exported without a parent label, so a scalar is written
    /// as `KEY` and a mapping as `KEY_CHILD` variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if the environment rejects a write. The
    /// map is updated even then.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Result<(), ConfigError> {
        let key = key.into();
        let value = value.into();

        let mut vars = Vec::new();
        flatten_entry(&key, &value, "", &mut vars);
        self.data.insert(key, value);

        write_vars(&mut self.env, &vars)
    }

    /// Exports every entry of the configuration into the environment.
    ///
    /// Variables that already exist under a computed name are overwritten.
    /// Exporting is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] on the first write the environment
    /// rejects; earlier writes are kept.
    pub fn export_all(&mut self) -> Result<(), ConfigError> {
        let vars = self.flatten();
        tracing::debug!(count = vars.len(), "exporting configuration");
        write_vars(&mut self.env, &vars)
    }

    /// Computes the variables [`ConfigStore::export_all`] would write, in
    /// write order, without touching the environment.
    ///
    /// A name may appear more than once when two paths collide; the last
    /// occurrence is the value that ends up in the environment.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        flatten(&self.data, "")
    }
}

// ============================================================================
// Flattening
// ============================================================================

/// Flattens `data` into `(NAME, value)` pairs.
///
/// `parent_key` labels the entries of `data`; pass `""` for a top-level map.
/// Nested mappings are labelled with their own key, replacing `parent_key`.
#[must_use]
pub fn flatten(data: &ConfigMap, parent_key: &str) -> Vec<(String, String)> {
    let mut vars = Vec::new();
    flatten_into(data, parent_key, &mut vars);
    vars
}

fn flatten_into(data: &ConfigMap, parent_key: &str, out: &mut Vec<(String, String)>) {
    for (key, value) in data {
        flatten_entry(key, value, parent_key, out);
    }
}

fn flatten_entry(
    key: &str,
    value: &ConfigValue,
    parent_key: &str,
    out: &mut Vec<(String, String)>,
) {
    match value {
        ConfigValue::Mapping(nested) => flatten_into(nested, key, out),
        other => out.push((var_name(parent_key, key), other.to_string())),
    }
}

/// Builds the exported variable name for `key` under `parent_key`.
#[must_use]
pub fn var_name(parent_key: &str, key: &str) -> String {
    if parent_key.is_empty() {
        key.to_uppercase()
    } else {
        format!("{parent_key}_{key}").to_uppercase()
    }
}

fn write_vars<E: EnvStore>(env: &mut E, vars: &[(String, String)]) -> Result<(), ConfigError> {
    for (name, value) in vars {
        env.set(name, value)?;
        tracing::trace!(name = %name, "exported variable");
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
