//! Error types for each fallible boundary

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure talking to the key-value store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Failure in a copy or download action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    #[error("download failed: {0}")]
    Download(String),
}

/// Invalid page configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content and title cannot share the storage key `{0}`")]
    DuplicateStorageKey(String),
    #[error("fallback file name must not be blank")]
    BlankFallbackName,
}

/// Render a JS exception as readable text
pub(crate) fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
