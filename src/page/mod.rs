//! Page model: editable state and the values derived from it

pub mod derived;
mod state;

pub use derived::{char_count, line_count, paragraphs, PageStats};
pub use state::PageState;
