//! Persistence of the draft in a key-value store

mod bridge;
mod local;
mod memory;

pub use bridge::PersistenceBridge;
pub use local::LocalStorage;
pub use memory::MemoryStore;

#[cfg(test)]
pub(crate) mod testing;

use crate::error::StorageError;

/// A string key-value store such as `window.localStorage`
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
