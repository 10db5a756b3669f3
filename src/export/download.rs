//! Download the content as a `.txt` file

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::{describe_js, ExportError};

pub const TEXT_MIME: &str = "text/plain;charset=utf-8";

/// File name for a download: the title, or `fallback` when it is blank
pub fn download_file_name(title: &str, fallback: &str) -> String {
    let stem = if title.trim().is_empty() { fallback } else { title };
    format!("{}.txt", stem)
}

/// Everything needed to hand a file to the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl DownloadRequest {
    pub fn new(title: &str, content: &str, fallback: &str) -> Self {
        Self {
            file_name: download_file_name(title, fallback),
            mime: TEXT_MIME,
            bytes: content.as_bytes().to_vec(),
        }
    }
}

/// Object URL revoked on drop
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &Blob) -> Result<Self, ExportError> {
        Url::create_object_url_with_blob(blob)
            .map(ObjectUrl)
            .map_err(|e| ExportError::Download(describe_js(&e)))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

/// Anchor attached to the document, detached on drop
struct TempAnchor(HtmlAnchorElement);

impl Drop for TempAnchor {
    fn drop(&mut self) {
        self.0.remove();
    }
}

/// Start a browser download for `request`.
///
/// The object URL and the temporary anchor are released on every return
/// path, including errors raised after they were created.
pub fn trigger_download(request: &DownloadRequest) -> Result<(), ExportError> {
    let js_err = |e: wasm_bindgen::JsValue| ExportError::Download(describe_js(&e));
    let missing = |what: &str| ExportError::Download(format!("no {} available", what));

    let window = web_sys::window().ok_or_else(|| missing("window"))?;
    let document = window.document().ok_or_else(|| missing("document"))?;
    let body = document.body().ok_or_else(|| missing("document body"))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(request.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(request.mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;

    let url = ObjectUrl::for_blob(&blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| missing("anchor element"))?;
    anchor.set_href(&url.0);
    anchor.set_download(&request.file_name);
    body.append_child(&anchor).map_err(js_err)?;
    let anchor = TempAnchor(anchor);

    anchor.0.click();
    Ok(())
}
