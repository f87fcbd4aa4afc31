//! In-memory settings store.
//!
//! The real controller reads preferences from the device's preference
//! storage; this adapter is the in-process stand-in used by tests and by
//! embedders that manage settings themselves.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::application::ports::SettingsStore;

/// Thread-safe in-memory key/value settings store.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemorySettingsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the value for `key`.
    pub fn set(&self, key: &str, value: &str) {
        let mut values = self
            .values
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        let values = self
            .values
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}
