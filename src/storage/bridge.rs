//! Load-once, write-through synchronisation between page state and a store

use tracing::{debug, warn};

use super::KeyValueStore;
use crate::config::PageConfig;
use crate::page::PageState;

/// Mirrors title and content into a key-value store
pub struct PersistenceBridge<S: KeyValueStore> {
    store: S,
    content_key: String,
    title_key: String,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    pub fn new(store: S, config: &PageConfig) -> Self {
        Self {
            store,
            content_key: config.content_key.clone(),
            title_key: config.title_key.clone(),
        }
    }

    /// Seed state from the store.
    ///
    /// A stored value replaces the default only when it is present and
    /// non-empty. Read failures leave the default in place. Any key that
    /// did not supply a value gets the default written back, so the store
    /// matches memory from the first paint.
    pub fn load(&mut self, state: &mut PageState) {
        match self.read(&self.content_key) {
            Some(content) => {
                state.set_content(content);
            }
            None => self.save_content(state.content()),
        }
        match self.read(&self.title_key) {
            Some(title) => {
                state.set_title(title);
            }
            None => self.save_title(state.title()),
        }
    }

    /// Write the current content, including an empty string
    pub fn save_content(&mut self, content: &str) {
        let key = self.content_key.clone();
        self.write(&key, content);
    }

    /// Write the current title, including an empty string
    pub fn save_title(&mut self, title: &str) {
        let key = self.title_key.clone();
        self.write(&key, title);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(Some(value)) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(err) => {
                warn!(%err, "load failed, keeping default");
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        match self.store.set(key, value) {
            Ok(()) => debug!(key, len = value.len(), "saved"),
            Err(err) => warn!(%err, "save failed, keeping in-memory value"),
        }
    }
}
