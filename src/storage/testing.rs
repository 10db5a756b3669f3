//! Store doubles shared by unit tests

use super::KeyValueStore;
use crate::error::StorageError;

/// Store whose every operation fails, like a disabled `localStorage`
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read {
            key: key.to_string(),
            reason: "disabled".to_string(),
        })
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        })
    }
}
