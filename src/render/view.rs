//! Render-ready description of both panes

use serde::Serialize;

use crate::page::{paragraphs, PageState, PageStats};

pub const APP_NAME: &str = "Simple Text Site Builder";
pub const UNTITLED: &str = "Untitled Page";
pub const EMPTY_PREVIEW: &str = "Start typing on the left to see a preview here.";

/// What the preview pane shows below the heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "paragraphs", rename_all = "camelCase")]
pub enum Preview {
    /// Content is empty
    Placeholder,
    /// One block per blank-line separated paragraph
    Paragraphs(Vec<String>),
}

/// Everything that changes as the user types
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub stats: PageStats,
    /// Title as typed, for the input field
    pub title: String,
    /// Heading shown in the preview
    pub heading: String,
    pub preview: Preview,
}

impl PageView {
    pub fn from_state(state: &PageState) -> Self {
        let heading = if state.title_is_blank() {
            UNTITLED.to_string()
        } else {
            state.title().to_string()
        };

        let content = state.content();
        let preview = if content.is_empty() {
            Preview::Placeholder
        } else {
            Preview::Paragraphs(paragraphs(content).into_iter().map(String::from).collect())
        };

        Self {
            stats: PageStats::of(content),
            title: state.title().to_string(),
            heading,
            preview,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
