//! Browser `localStorage`

use web_sys::Storage;

use super::KeyValueStore;
use crate::error::{describe_js, StorageError};

/// `window.localStorage` behind the store trait
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the window's local storage.
    ///
    /// Fails when there is no window or the host disabled storage
    /// (private browsing modes, sandboxed frames).
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(StorageError::Unavailable),
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: describe_js(&e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: describe_js(&e),
            })
    }
}
