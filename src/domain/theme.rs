use crate::domain::errors::StorageResult;
use crate::domain::logging::{LogComponent, get_logger};

/// Storage key holding the serialized dark-mode flag
pub const THEME_STORAGE_KEY: &str = "theme-preference";

/// Key-value storage for user preferences
pub trait PreferenceStorage {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Dark-mode flag persisted as a JSON boolean
pub struct ThemeStore<S: PreferenceStorage> {
    storage: S,
    key: String,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, THEME_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Saved value if present and parsable, otherwise the system preference.
    pub fn load(&self, system_prefers_dark: bool) -> bool {
        match self.stored() {
            Some(dark) => dark,
            None => {
                get_logger().debug(
                    LogComponent::Domain("Theme"),
                    &format!("No saved theme, using system preference (dark: {system_prefers_dark})"),
                );
                system_prefers_dark
            }
        }
    }

    /// Stored flag, `None` when unset or not a JSON boolean.
    pub fn stored(&self) -> Option<bool> {
        let raw = self.storage.get_raw(&self.key)?;
        match serde_json::from_str::<bool>(&raw) {
            Ok(dark) => Some(dark),
            Err(e) => {
                get_logger().warn(
                    LogComponent::Domain("Theme"),
                    &format!("Ignoring unreadable theme preference {raw:?}: {e}"),
                );
                None
            }
        }
    }

    pub fn save(&self, dark_mode: bool) -> StorageResult<()> {
        self.storage.set_raw(&self.key, if dark_mode { "true" } else { "false" })
    }
}

impl<T: PreferenceStorage + ?Sized> PreferenceStorage for &T {
    fn get_raw(&self, key: &str) -> Option<String> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_raw(key, value)
    }
}
