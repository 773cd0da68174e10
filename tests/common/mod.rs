//! Shared integration-test harness for running the `yamlenv` binary and for
//! building the reference configuration used across test files.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::{Mutex, MutexGuard, OnceLock};

use yamlenv::config::{ConfigMap, ConfigValue};

/// Helpers for invoking the compiled `yamlenv` binary.
pub struct YamlEnvProcess;

impl YamlEnvProcess {
    /// Runs `yamlenv` with `args` and waits for it to exit.
    ///
    /// Logging overrides from the calling environment are cleared so stderr
    /// only carries what the test asks for.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::spawn_command_in(args, None)
    }

    /// Like [`spawn_command`](Self::spawn_command) but with a working
    /// directory.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command_in(args: &[&str], cwd: Option<&Path>) -> Output {
        let bin = env!("CARGO_BIN_EXE_yamlenv");
        let mut cmd = Command::new(bin);
        cmd.args(args)
            .env_remove("YAMLENV_LOG_LEVEL")
            .env_remove("YAMLENV_CONFIG");
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd.output().expect("failed to run yamlenv")
    }

    /// Path to a file under `tests/fixtures`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}

/// Serializes tests that write to the process environment.
pub fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn map<const N: usize>(entries: [(&str, ConfigValue); N]) -> ConfigMap {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// The reference configuration: every value kind, two levels of nesting.
pub fn reference_data() -> ConfigMap {
    map([
        ("bool", false.into()),
        ("number", 1.into()),
        ("string", "test_string".into()),
        ("sequence", vec!["item1", "item2", "item3"].into()),
        (
            "mapping",
            map([
                ("key1", "value1".into()),
                (
                    "key2",
                    map([("key2a", "value2a".into()), ("key2b", "value2b".into())]).into(),
                ),
                ("key3", vec!["value3a", "value3b", "value3c"].into()),
                ("key4", true.into()),
            ])
            .into(),
        ),
    ])
}
