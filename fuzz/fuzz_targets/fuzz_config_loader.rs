#![no_main]

use libfuzzer_sys::fuzz_target;
use yamlenv::config::{ConfigStore, MemoryEnv};

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml_str) = std::str::from_utf8(data) {
        // Loading may fail; exporting whatever loads must not panic
        if let Ok(mut store) = ConfigStore::from_yaml_str(yaml_str, MemoryEnv::new()) {
            let _ = store.export_all();
        }
    }
});
