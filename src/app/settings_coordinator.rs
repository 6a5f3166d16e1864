//! Settings persistence.
//!
//! Any serializable setting (the panel configuration, the layout) is stored in
//! eframe storage as a JSON string under its own key.

use serde::{Deserialize, Serialize};

pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, returning `default` when the key is missing or the
    /// stored JSON no longer decodes.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        match Self::try_load_setting(storage, key) {
            Some(value) => value,
            None => default,
        }
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring unreadable stored setting");
                None
            }
        }
    }

    /// Serializes `value` to JSON and stores it under `key`.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(err) => tracing::warn!(key, error = %err, "failed to serialize setting"),
        }
    }
}
