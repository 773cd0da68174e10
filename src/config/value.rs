//! Configuration values
//!
//! `ConfigValue` is the closed set of shapes a YAML configuration document
//! can take once parsed. Its `Display` implementation is the coercion used
//! whenever a value is written into an environment namespace.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value;

/// Insertion-ordered mapping from configuration keys to values.
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// A single configuration value.
///
/// Serializes untagged, so a `ConfigMap` written with `serde_yaml` or
/// `serde_json` reads back as the document it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Empty YAML scalar (`key:` or `key: ~`).
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Integer(i64),
    /// Integer scalar above `i64::MAX`.
    Unsigned(u64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    String(String),
    /// Ordered sequence of values.
    Sequence(Vec<ConfigValue>),
    /// Nested mapping.
    Mapping(ConfigMap),
}

impl ConfigValue {
    /// Returns `true` if this value is a nested mapping.
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Returns the nested mapping, if this value is one.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&ConfigMap> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the string slice, if this value is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders the value the way it is written into the environment.
///
/// - `Null` is `None`; booleans are `True` and `False`.
/// - Integers are exact decimals.
/// - Floats use the shortest form that reads back to the same value, keeping
///   `.0` when integral (`1.0`, `1e300`); non-finite values are `inf`,
///   `-inf` and `nan`.
/// - Sequences join their rendered elements with a single space.
/// - Mappings render as compact JSON.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Float(n) => write_float(f, *n),
            Self::String(s) => f.write_str(s),
            Self::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Mapping(map) => {
                let json = serde_json::to_string(map).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("nan")
    } else {
        // Debug is the shortest round-trip form and spells infinities `inf`
        write!(f, "{n:?}")
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Unsigned(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Self::String(s),
            Value::Sequence(seq) => Self::Sequence(seq.into_iter().map(Self::from).collect()),
            Value::Mapping(map) => Self::Mapping(mapping_to_config(map)),
            Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

/// Converts a parsed YAML mapping into a `ConfigMap`, preserving order.
///
/// Keys that are not strings are rendered with the same rules as values, so
/// `1: x` is stored under `"1"`. A later key that renders identically to an
/// earlier one replaces it.
#[must_use]
pub fn mapping_to_config(map: serde_yaml::Mapping) -> ConfigMap {
    map.into_iter()
        .map(|(k, v)| (key_string(k), ConfigValue::from(v)))
        .collect()
}

fn key_string(key: Value) -> String {
    match key {
        Value::String(s) => s,
        other => ConfigValue::from(other).to_string(),
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for ConfigValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for ConfigValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Self>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        Self::Mapping(map)
    }
}

// ============================================================================
// Tests
// ============================================================================
