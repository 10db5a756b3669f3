//! Presentation: a view model of the page and its DOM rendering

mod dom;
mod view;

pub use dom::DomView;
pub use view::{PageView, Preview, APP_NAME, EMPTY_PREVIEW, UNTITLED};
