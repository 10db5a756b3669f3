//! In-process store

use rustc_hash::FxHashMap;

use super::KeyValueStore;
use crate::error::StorageError;

/// Key-value store held in memory.
///
/// Used natively and as the stand-in when the browser store cannot be
/// opened, so editing keeps working for the session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
