//! WASM bindings for the page builder

mod app;

pub use app::mount;

use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::error::StorageError;
use crate::export::{copy_content, trigger_download, AlertNotifier, BrowserClipboard, Notice};
use crate::storage::{KeyValueStore, LocalStorage, MemoryStore};
use crate::{PageConfig, PageEditor};

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// `localStorage` when the host allows it, otherwise a session-only store
pub enum BrowserStore {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match LocalStorage::open() {
            Ok(storage) => BrowserStore::Local(storage),
            Err(err) => {
                warn!(%err, "drafts will not survive a reload");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStore::Local(store) => store.get(key),
            BrowserStore::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStore::Local(store) => store.set(key, value),
            BrowserStore::Memory(store) => store.set(key, value),
        }
    }
}

/// Parse a host-supplied config, falling back to defaults when it is bad
pub(crate) fn resolve_config(json: Option<&str>) -> PageConfig {
    match json.map(PageConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            warn!(%err, "ignoring page config");
            PageConfig::default()
        }
        None => PageConfig::default(),
    }
}

/// WASM-exposed editor wrapper for hosts that draw their own UI
#[wasm_bindgen]
pub struct WasmPageBuilder {
    editor: PageEditor<BrowserStore>,
}

#[wasm_bindgen]
impl WasmPageBuilder {
    /// Create an editor seeded from `localStorage`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Self {
        let config = resolve_config(config_json.as_deref());
        Self {
            editor: PageEditor::load(BrowserStore::open(), config),
        }
    }

    pub fn title(&self) -> String {
        self.editor.title().to_string()
    }

    pub fn content(&self) -> String {
        self.editor.content().to_string()
    }

    #[wasm_bindgen(js_name = setTitle)]
    pub fn set_title(&mut self, title: String) {
        self.editor.set_title(title);
    }

    #[wasm_bindgen(js_name = setContent)]
    pub fn set_content(&mut self, content: String) {
        self.editor.set_content(content);
    }

    #[wasm_bindgen(js_name = lineCount)]
    pub fn line_count(&self) -> usize {
        self.editor.stats().lines
    }

    #[wasm_bindgen(js_name = charCount)]
    pub fn char_count(&self) -> usize {
        self.editor.stats().chars
    }

    /// Preview paragraphs (empty when there is no content)
    pub fn paragraphs(&self) -> Vec<String> {
        if self.editor.content().is_empty() {
            return Vec::new();
        }
        self.editor.paragraphs().into_iter().map(String::from).collect()
    }

    #[wasm_bindgen(js_name = downloadFileName)]
    pub fn download_file_name(&self) -> String {
        self.editor.download_request().file_name
    }

    /// Save the content as a `.txt` file
    pub fn download(&self) -> Result<(), JsValue> {
        trigger_download(&self.editor.download_request())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Copy the content; resolves to `true` on success. Never rejects.
    pub fn copy(&self) -> js_sys::Promise {
        let content = self.editor.content().to_string();
        wasm_bindgen_futures::future_to_promise(async move {
            let notice = copy_content(&BrowserClipboard, &AlertNotifier, &content).await;
            Ok(JsValue::from_bool(notice == Notice::Copied))
        })
    }

    /// Render model as JSON
    #[wasm_bindgen(js_name = viewJson)]
    pub fn view_json(&self) -> String {
        self.editor.view().to_json()
    }
}

impl Default for WasmPageBuilder {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        assert_eq!(resolve_config(None), PageConfig::default());
    }

    #[test]
    fn test_bad_config_uses_defaults() {
        assert_eq!(resolve_config(Some("[1, 2")), PageConfig::default());
        assert_eq!(
            resolve_config(Some(r#"{"contentKey": "same", "titleKey": "same"}"#)),
            PageConfig::default()
        );
    }

    #[test]
    fn test_good_config_applies() {
        let config = resolve_config(Some(r#"{"defaultTitle": "Hi"}"#));
        assert_eq!(config.default_title, "Hi");
    }

    #[test]
    fn test_memory_fallback_store() {
        let mut store = BrowserStore::Memory(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
