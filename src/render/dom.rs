//! DOM rendering of the two-pane layout

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use super::view::{PageView, Preview, APP_NAME, EMPTY_PREVIEW};

const TITLE_PLACEHOLDER: &str = "Page title";
const CONTENT_PLACEHOLDER: &str = "Paste or type any text you want to turn into a webpage.";
const FOOTER: &str = "Built for quickly turning any text into a clean, readable web page.";

/// Handles to the elements that change after the first paint
pub struct DomView {
    document: Document,
    line_count: Element,
    char_count: Element,
    pub title_input: HtmlInputElement,
    pub content_input: HtmlTextAreaElement,
    pub copy_button: HtmlElement,
    pub download_button: HtmlElement,
    heading: Element,
    preview_body: Element,
}

impl DomView {
    /// Build the page skeleton inside `root`, replacing its children
    pub fn build(document: &Document, root: &Element) -> Result<Self, JsValue> {
        root.set_text_content(None);

        // Header with live counts
        let header = element(document, "header", "tpb-header")?;
        let app_name = element(document, "h1", "tpb-app-name")?;
        app_name.set_text_content(Some(APP_NAME));
        let stats = element(document, "div", "tpb-stats")?;
        let line_count = element(document, "span", "tpb-line-count")?;
        let char_count = element(document, "span", "tpb-char-count")?;
        append_text(document, &stats, "Lines: ")?;
        stats.append_child(&line_count)?;
        append_text(document, &stats, " \u{2022} Characters: ")?;
        stats.append_child(&char_count)?;
        header.append_child(&app_name)?;
        header.append_child(&stats)?;

        let main = element(document, "main", "tpb-main")?;

        // Editor pane
        let editor = element(document, "section", "tpb-editor")?;
        let toolbar = element(document, "div", "tpb-toolbar")?;
        let title_input: HtmlInputElement = element(document, "input", "tpb-title-input")?.dyn_into()?;
        title_input.set_placeholder(TITLE_PLACEHOLDER);
        let copy_button: HtmlElement = element(document, "button", "tpb-copy")?.dyn_into()?;
        copy_button.set_text_content(Some("Copy"));
        let download_button: HtmlElement = element(document, "button", "tpb-download")?.dyn_into()?;
        download_button.set_text_content(Some("Download"));
        toolbar.append_child(&title_input)?;
        toolbar.append_child(&copy_button)?;
        toolbar.append_child(&download_button)?;
        let content_input: HtmlTextAreaElement =
            element(document, "textarea", "tpb-content-input")?.dyn_into()?;
        content_input.set_placeholder(CONTENT_PLACEHOLDER);
        editor.append_child(&toolbar)?;
        editor.append_child(&content_input)?;

        // Preview pane
        let preview = element(document, "section", "tpb-preview")?;
        let preview_header = element(document, "div", "tpb-preview-header")?;
        let preview_title = element(document, "h2", "")?;
        preview_title.set_text_content(Some("Live Preview"));
        let preview_hint = element(document, "p", "tpb-preview-hint")?;
        preview_hint.set_text_content(Some("This is how your page will look."));
        preview_header.append_child(&preview_title)?;
        preview_header.append_child(&preview_hint)?;
        let page = element(document, "div", "tpb-page")?;
        let heading = element(document, "h1", "tpb-page-heading")?;
        let preview_body = element(document, "div", "tpb-page-body")?;
        page.append_child(&heading)?;
        page.append_child(&preview_body)?;
        preview.append_child(&preview_header)?;
        preview.append_child(&page)?;

        main.append_child(&editor)?;
        main.append_child(&preview)?;

        let footer = element(document, "footer", "tpb-footer")?;
        footer.set_text_content(Some(FOOTER));

        root.append_child(&header)?;
        root.append_child(&main)?;
        root.append_child(&footer)?;

        Ok(Self {
            document: document.clone(),
            line_count,
            char_count,
            title_input,
            content_input,
            copy_button,
            download_button,
            heading,
            preview_body,
        })
    }

    /// Put loaded values into the input fields. Only done once, so typing
    /// never has its caret moved by a re-render.
    pub fn fill_inputs(&self, title: &str, content: &str) {
        self.title_input.set_value(title);
        self.content_input.set_value(content);
    }

    /// Update counts, heading and preview body
    pub fn render(&self, view: &PageView) -> Result<(), JsValue> {
        self.line_count
            .set_text_content(Some(&view.stats.lines.to_string()));
        self.char_count
            .set_text_content(Some(&view.stats.chars.to_string()));
        self.heading.set_text_content(Some(&view.heading));

        self.preview_body.set_text_content(None);
        match &view.preview {
            Preview::Placeholder => {
                let hint = element(&self.document, "div", "tpb-empty")?;
                hint.set_text_content(Some(EMPTY_PREVIEW));
                self.preview_body.append_child(&hint)?;
            }
            Preview::Paragraphs(paragraphs) => {
                let article = element(&self.document, "article", "tpb-article")?;
                for paragraph in paragraphs {
                    let block = element(&self.document, "p", "tpb-paragraph")?;
                    // Single newlines inside a paragraph stay visible
                    block.set_attribute("style", "white-space: pre-wrap")?;
                    block.set_text_content(Some(paragraph));
                    article.append_child(&block)?;
                }
                self.preview_body.append_child(&article)?;
            }
        }
        Ok(())
    }
}

fn element(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

fn append_text(document: &Document, parent: &Element, text: &str) -> Result<(), JsValue> {
    parent.append_child(&document.create_text_node(text))?;
    Ok(())
}
