use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{
    errors::{AppError, StorageResult},
    logging::{LogComponent, get_logger},
    theme::PreferenceStorage,
};

/// Browser `localStorage` backed preferences.
///
/// Privacy modes and sandboxed iframes may deny storage; reads then come back
/// empty and writes fail with `StorageError`.
#[derive(Clone, Debug)]
pub struct LocalStoragePreferences {
    storage: Option<web_sys::Storage>,
}

impl LocalStoragePreferences {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            get_logger().warn(
                LogComponent::Infrastructure("LocalStorage"),
                "localStorage unavailable, theme will not persist",
            );
        }
        Self { storage }
    }

    /// No backing storage at all
    pub fn detached() -> Self {
        Self { storage: None }
    }
}

impl Default for LocalStoragePreferences {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStorage for LocalStoragePreferences {
    fn get_raw(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                get_logger().warn(
                    LogComponent::Infrastructure("LocalStorage"),
                    &format!("Failed to read {key}: {e:?}"),
                );
                None
            }
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> StorageResult<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| AppError::storage(format!("localStorage unavailable, {key} not saved")))?;
        storage
            .set_item(key, value)
            .map_err(|e| AppError::storage(format!("Failed to write {key}: {e:?}")))
    }
}

/// In-memory preferences, used off-browser and in tests
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs.values.borrow_mut().insert(key.to_string(), value.to_string());
        prefs
    }
}

impl PreferenceStorage for MemoryPreferences {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> StorageResult<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
