//! Clipboard copy with user-facing notices

use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::error::{describe_js, ExportError};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn navigator_clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

/// Outcome shown to the user after a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Copied,
    CopyFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Copied => "Content copied to clipboard",
            Notice::CopyFailed => "Copy failed. Try selecting and copying manually.",
        }
    }
}

/// Something that accepts text for the system clipboard
#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<(), ExportError>;
}

/// Displays notices to the user
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// `navigator.clipboard`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl ClipboardWriter for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ExportError> {
        // Throws synchronously when the API is missing, rejects on denied permission
        navigator_clipboard_write_text(text)
            .await
            .map(|_| ())
            .map_err(|e| ExportError::Clipboard(describe_js(&e)))
    }
}

/// `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: Notice) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(notice.message());
        }
    }
}

/// Copy `content` and tell the user how it went. Never fails.
pub async fn copy_content<C, N>(clipboard: &C, notifier: &N, content: &str) -> Notice
where
    C: ClipboardWriter,
    N: Notifier,
{
    let notice = match clipboard.write_text(content).await {
        Ok(()) => Notice::Copied,
        Err(err) => {
            warn!(%err, "copy failed");
            Notice::CopyFailed
        }
    };
    notifier.notify(notice);
    notice
}
