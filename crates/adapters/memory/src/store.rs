use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use themepref_app::ports::PreferenceStore;
use themepref_domain::error::StorageError;

/// Preference store kept in a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `value` under `key`.
    #[must_use]
    pub fn seeded(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Raw value under `key`, bypassing failure simulation.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Drop every key, like a user clearing site data.
    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }

    /// Make subsequent reads fail with [`StorageError::Unavailable`].
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make subsequent writes fail with [`StorageError::Write`].
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "simulated write failure".to_string(),
            });
        }
        tracing::trace!(key, value, "memory store write");
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_none_for_missing_key() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn should_overwrite_previous_value() {
        let store = MemoryPreferenceStore::seeded("theme", "light");
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn should_forget_everything_on_clear() {
        let store = MemoryPreferenceStore::seeded("theme", "dark");
        store.clear();
        assert_eq!(store.value("theme"), None);
    }

    #[test]
    fn should_simulate_unavailable_storage() {
        let store = MemoryPreferenceStore::seeded("theme", "dark");
        store.fail_reads(true);
        assert_eq!(store.get("theme"), Err(StorageError::Unavailable));
        store.fail_reads(false);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn should_keep_old_value_when_write_fails() {
        let store = MemoryPreferenceStore::seeded("theme", "light");
        store.fail_writes(true);
        assert!(matches!(
            store.set("theme", "dark"),
            Err(StorageError::Write { .. })
        ));
        assert_eq!(store.value("theme").as_deref(), Some("light"));
    }
}
