//! Configuration loader
//!
//! Reads a YAML document from disk (or from memory) into a [`ConfigMap`]:
//! 1. Read raw bytes (any open/read failure is a missing file)
//! 2. Strip a UTF-8 BOM
//! 3. YAML parsing; the root must be a mapping or empty
//! 4. Conversion to ordered `ConfigValue`s

use std::path::{Path, PathBuf};

use crate::config::value::{ConfigMap, mapping_to_config};
use crate::error::ConfigError;

/// Path used when no configuration file is given.
pub const DEFAULT_CONFIG_PATH: &str = ".config.yml";

/// Label used in errors for documents that did not come from a file.
const INLINE_SOURCE: &str = "<inline>";

/// Loads a YAML configuration file.
///
/// An empty document yields an empty map.
///
/// # Errors
///
/// Returns [`ConfigError::FileNotFound`] if the file cannot be read, or
/// [`ConfigError::Parse`] if it is not valid YAML or its root is not a
/// mapping.
pub fn load_file(path: &Path) -> Result<ConfigMap, ConfigError> {
    let raw = std::fs::read(path).map_err(|source| ConfigError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let map = parse_bytes(&raw, path)?;
    tracing::debug!(path = %path.display(), keys = map.len(), "loaded configuration");
    Ok(map)
}

/// Parses YAML text held in memory.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the text is not valid YAML or its root
/// is not a mapping.
pub fn parse_str(yaml: &str) -> Result<ConfigMap, ConfigError> {
    parse_bytes(yaml.as_bytes(), Path::new(INLINE_SOURCE))
}

fn parse_bytes(raw: &[u8], path: &Path) -> Result<ConfigMap, ConfigError> {
    let raw = raw.strip_prefix(b"\xef\xbb\xbf").unwrap_or(raw);

    let root: Option<serde_yaml::Mapping> =
        serde_yaml::from_slice(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::from(path),
            source,
        })?;

    Ok(root.map(mapping_to_config).unwrap_or_default())
}

// ============================================================================
// Tests
// ============================================================================
