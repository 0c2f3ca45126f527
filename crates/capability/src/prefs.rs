//! Preference store capability
//!
//! Keyed user preferences (mute flags, saved state blobs). Injected rather
//! than ambient so tests can substitute a fake.

use anyhow::Result;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

/// Keyed preference storage
///
/// Values are JSON so callers can store anything serializable without the
/// store knowing their types. `get` returns `None` for unknown keys.
pub trait PreferenceStore: Send + Sync {
    /// Read a preference value
    fn get(&self, key: &str) -> Option<Value>;

    /// Write a preference value
    fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Read a boolean flag, with a default for unset keys
    fn get_flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => b,
            _ => default,
        }
    }
}

/// In-memory preference store for tests and single-process use
#[derive(Default)]
pub struct MemoryPrefs {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_returns_none_for_unknown_key() {
        let prefs = MemoryPrefs::new();
        assert!(prefs.get("missing").is_none());
    }

    #[test]
    fn test_set_then_get() {
        let prefs = MemoryPrefs::new();
        prefs.set("volume", json!(0.8)).unwrap();
        assert_eq!(prefs.get("volume"), Some(json!(0.8)));
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let prefs = MemoryPrefs::new();
        prefs.set("level", json!(1)).unwrap();
        prefs.set("level", json!(2)).unwrap();
        assert_eq!(prefs.get("level"), Some(json!(2)));
    }

    #[test]
    fn test_get_flag_defaults() {
        let prefs = MemoryPrefs::new();
        assert!(prefs.get_flag("sound_enabled", true));
        assert!(!prefs.get_flag("sound_enabled", false));

        prefs.set("sound_enabled", json!(false)).unwrap();
        assert!(!prefs.get_flag("sound_enabled", true));
    }

    #[test]
    fn test_get_flag_ignores_non_bool_values() {
        let prefs = MemoryPrefs::new();
        prefs.set("sound_enabled", json!("yes")).unwrap();
        assert!(prefs.get_flag("sound_enabled", true));
    }
}
