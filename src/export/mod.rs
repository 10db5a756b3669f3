//! User-triggered export actions: copy to clipboard and download as a file

mod clipboard;
mod download;

pub use clipboard::{copy_content, AlertNotifier, BrowserClipboard, ClipboardWriter, Notice, Notifier};
pub use download::{download_file_name, trigger_download, DownloadRequest, TEXT_MIME};
