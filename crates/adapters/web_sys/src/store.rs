use themepref_app::ports::PreferenceStore;
use themepref_domain::error::StorageError;
use web_sys::Storage;

use crate::describe;

/// Preference store backed by `window.localStorage`.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    /// Store for the current window.
    ///
    /// Accessing `localStorage` throws in some sandboxed or privacy modes;
    /// the store is then unavailable and every call reports
    /// [`StorageError::Unavailable`].
    #[must_use]
    pub fn from_window() -> Self {
        let storage = web_sys::window().and_then(|window| match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                tracing::warn!(error = %describe(&err), "localStorage is not accessible");
                None
            }
        });
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                reason: describe(&err),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: describe(&err),
            })
    }
}
