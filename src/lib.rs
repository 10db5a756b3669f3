//! Text Page Builder: type text, preview it as a simple web page
//!
//! This crate provides the editing core and its browser front end:
//! - Title and content state mirrored into `localStorage`
//! - Live line/character counts and blank-line paragraph preview
//! - Copy to clipboard and download as `.txt`
//! - A DOM renderer and WASM bindings to mount it in a page

pub mod config;
pub mod error;
pub mod export;
pub mod page;
pub mod render;
pub mod storage;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmPageBuilder;

// Re-export primary types
pub use config::PageConfig;
pub use error::{ConfigError, ExportError, StorageError};
pub use export::{DownloadRequest, Notice};
pub use page::{PageState, PageStats};
pub use render::{PageView, Preview};
pub use storage::{KeyValueStore, LocalStorage, MemoryStore, PersistenceBridge};

use tracing::debug;

/// The page editor combining state, persistence and derived views
pub struct PageEditor<S: KeyValueStore> {
    state: PageState,
    bridge: PersistenceBridge<S>,
    config: PageConfig,
}

impl<S: KeyValueStore> PageEditor<S> {
    /// Create an editor seeded from whatever `store` already holds
    pub fn load(store: S, config: PageConfig) -> Self {
        let mut state = PageState::new(config.default_title.clone());
        let mut bridge = PersistenceBridge::new(store, &config);
        bridge.load(&mut state);
        debug!(
            title = state.title(),
            content_len = state.content().len(),
            "page loaded"
        );

        Self {
            state,
            bridge,
            config,
        }
    }

    pub fn title(&self) -> &str {
        self.state.title()
    }

    pub fn content(&self) -> &str {
        self.state.content()
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Replace the title and write it through to storage
    pub fn set_title(&mut self, title: impl Into<String>) {
        if self.state.set_title(title) {
            self.bridge.save_title(self.state.title());
        }
    }

    /// Replace the content and write it through to storage
    pub fn set_content(&mut self, content: impl Into<String>) {
        if self.state.set_content(content) {
            self.bridge.save_content(self.state.content());
        }
    }

    pub fn stats(&self) -> PageStats {
        PageStats::of(self.state.content())
    }

    pub fn paragraphs(&self) -> Vec<&str> {
        page::paragraphs(self.state.content())
    }

    /// Build the render model for both panes
    pub fn view(&self) -> PageView {
        PageView::from_state(&self.state)
    }

    /// Package the current content as a `.txt` download
    pub fn download_request(&self) -> DownloadRequest {
        DownloadRequest::new(
            self.state.title(),
            self.state.content(),
            &self.config.fallback_file_name,
        )
    }

    pub fn store(&self) -> &S {
        self.bridge.store()
    }

    /// Tear down the editor, keeping the store (simulates a page unload)
    pub fn into_store(self) -> S {
        self.bridge.into_store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{copy_content, ClipboardWriter, Notifier};
    use crate::storage::testing::BrokenStore;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn fresh() -> PageEditor<MemoryStore> {
        PageEditor::load(MemoryStore::new(), PageConfig::default())
    }

    fn reload(editor: PageEditor<MemoryStore>) -> PageEditor<MemoryStore> {
        let config = editor.config().clone();
        PageEditor::load(editor.into_store(), config)
    }

    #[test]
    fn test_fresh_start() {
        let editor = fresh();
        assert_eq!(editor.title(), "Your Custom Text Page");
        assert_eq!(editor.content(), "");
        assert_eq!(editor.stats(), PageStats { lines: 0, chars: 0 });
        assert_eq!(editor.view().preview, Preview::Placeholder);
    }

    #[test]
    fn test_store_matches_memory_after_load() {
        let mut store = MemoryStore::new();
        store.set("custom_text_title", "").unwrap();
        let editor = PageEditor::load(store, PageConfig::default());

        assert_eq!(editor.title(), "Your Custom Text Page");
        assert_eq!(
            editor.store().get("custom_text_title").unwrap().as_deref(),
            Some(editor.title())
        );
        assert_eq!(
            editor.store().get("custom_text_content").unwrap().as_deref(),
            Some(editor.content())
        );
    }

    #[test]
    fn test_edits_apply_when_store_fails() {
        let mut editor = PageEditor::load(BrokenStore, PageConfig::default());
        assert_eq!(editor.title(), "Your Custom Text Page");

        editor.set_content("Hello\n\nWorld");
        editor.set_title("Offline");

        assert_eq!(editor.content(), "Hello\n\nWorld");
        assert_eq!(editor.title(), "Offline");
        assert_eq!(editor.stats(), PageStats { lines: 3, chars: 12 });
        assert_eq!(editor.download_request().file_name, "Offline.txt");
    }

    #[test]
    fn test_hello_world() {
        let mut editor = fresh();
        editor.set_content("Hello\n\nWorld");
        assert_eq!(editor.paragraphs(), vec!["Hello", "World"]);
        assert_eq!(editor.stats(), PageStats { lines: 3, chars: 12 });
    }

    #[test]
    fn test_download_names() {
        let mut editor = fresh();
        editor.set_title("");
        assert_eq!(editor.download_request().file_name, "content.txt");

        editor.set_title("My Page");
        assert_eq!(editor.download_request().file_name, "My Page.txt");
    }

    #[test]
    fn test_content_survives_reload() {
        let mut editor = fresh();
        editor.set_content("abc");
        let editor = reload(editor);
        assert_eq!(editor.content(), "abc");
    }

    #[test]
    fn test_round_trip_with_blank_lines() {
        let text = "first\n\n\nsecond\n";
        let mut editor = fresh();
        editor.set_content(text);
        let editor = reload(editor);
        assert_eq!(editor.content(), text);
    }

    #[test]
    fn test_cleared_content_persists_as_empty() {
        let mut editor = fresh();
        editor.set_content("draft");
        editor.set_content("");
        assert_eq!(
            editor.store().get("custom_text_content").unwrap().as_deref(),
            Some("")
        );
        let editor = reload(editor);
        assert_eq!(editor.content(), "");
    }

    #[test]
    fn test_title_write_through() {
        let mut editor = fresh();
        editor.set_title("Garden Notes");
        assert_eq!(
            editor.store().get("custom_text_title").unwrap().as_deref(),
            Some("Garden Notes")
        );
        assert_eq!(reload(editor).title(), "Garden Notes");
    }

    #[test]
    fn test_custom_config_keys_and_default_title() {
        let config = PageConfig {
            content_key: "site_body".to_string(),
            title_key: "site_head".to_string(),
            default_title: "Draft".to_string(),
            fallback_file_name: "page".to_string(),
        };
        let mut editor = PageEditor::load(MemoryStore::new(), config);
        assert_eq!(editor.title(), "Draft");

        editor.set_content("x");
        editor.set_title(" ");
        assert_eq!(editor.store().get("site_body").unwrap().as_deref(), Some("x"));
        assert_eq!(editor.download_request().file_name, "page.txt");
    }

    struct RejectingClipboard;

    impl ClipboardWriter for RejectingClipboard {
        async fn write_text(&self, _text: &str) -> Result<(), ExportError> {
            Err(ExportError::Clipboard("permission denied".to_string()))
        }
    }

    struct LastNotice(Cell<Option<Notice>>);

    impl Notifier for LastNotice {
        fn notify(&self, notice: Notice) {
            self.0.set(Some(notice));
        }
    }

    #[test]
    fn test_rejected_copy_leaves_content() {
        let mut editor = fresh();
        editor.set_content("keep me");
        let notifier = LastNotice(Cell::new(None));

        block_on(copy_content(&RejectingClipboard, &notifier, editor.content()));

        assert_eq!(notifier.0.get(), Some(Notice::CopyFailed));
        assert_eq!(editor.content(), "keep me");
    }
}
