//! Editable page state

use crate::config::DEFAULT_TITLE;

/// The title and body the user is editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    title: String,
    content: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl PageState {
    /// Create state with the given title and empty content
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the title; returns true if the value changed
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        replace_if_changed(&mut self.title, title.into())
    }

    /// Replace the content; returns true if the value changed
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        replace_if_changed(&mut self.content, content.into())
    }

    /// True when the title has no visible characters
    pub fn title_is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }
}

fn replace_if_changed(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
