//! Environment namespaces
//!
//! A [`ConfigStore`](crate::config::ConfigStore) never touches the process
//! environment directly; it reads and writes through an [`EnvStore`]. The
//! production backend is [`ProcessEnv`]. [`MemoryEnv`] keeps the same
//! contract in an ordered map so callers can flatten a configuration without
//! side effects.

#![allow(
    unsafe_code,
    reason = "ProcessEnv::set is the one place the process environment is mutated."
)]

use indexmap::IndexMap;

use crate::error::EnvError;

/// A string-to-string variable namespace.
pub trait EnvStore {
    /// Returns the value stored under `name`, if any.
    ///
    /// Lookups are exact and case-sensitive.
    fn get(&self, name: &str) -> Option<String>;

    /// Stores `value` under `name`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError`] if the name or value cannot be represented in a
    /// process environment (see [`validate_var`]).
    fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError>;
}

/// Checks that a variable can be written to a process environment.
///
/// Names must be non-empty and contain neither `=` nor NUL; values must not
/// contain NUL. Every backend applies the same rule so that in-memory and
/// process exports accept exactly the same input.
///
/// # Errors
///
/// Returns [`EnvError::InvalidName`] or [`EnvError::InvalidValue`].
pub fn validate_var(name: &str, value: &str) -> Result<(), EnvError> {
    let invalid_name = |reason| EnvError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid_name("name is empty"));
    }
    if name.contains('=') {
        return Err(invalid_name("name contains '='"));
    }
    if name.contains('\0') {
        return Err(invalid_name("name contains a NUL byte"));
    }
    if value.contains('\0') {
        return Err(EnvError::InvalidValue {
            name: name.to_string(),
            reason: "value contains a NUL byte",
        });
    }
    Ok(())
}

// ============================================================================
// Process Environment
// ============================================================================

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        validate_var(name, value)?;
        // SAFETY: the process environment is treated as owned by the caller;
        // concurrent writers in the same process are outside this crate's
        // guarantees. Inputs std would panic on are rejected above.
        unsafe {
            std::env::set_var(name, value);
        }
        Ok(())
    }
}

// ============================================================================
// In-Memory Environment
// ============================================================================

/// An insertion-ordered, in-memory environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: IndexMap<String, String>,
}

impl MemoryEnv {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if no variable is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns `true` if `name` is set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Iterates over `(name, value)` pairs in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consumes the environment, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, String> {
        self.vars
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        validate_var(name, value)?;
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
