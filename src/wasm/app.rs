//! Mounted single-page app: DOM, editor state and event wiring

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use super::{resolve_config, BrowserStore};
use crate::export::{copy_content, trigger_download, AlertNotifier, BrowserClipboard};
use crate::render::DomView;
use crate::PageEditor;

struct App {
    editor: RefCell<PageEditor<BrowserStore>>,
    dom: DomView,
}

impl App {
    fn refresh(&self) {
        let view = self.editor.borrow().view();
        if let Err(err) = self.dom.render(&view) {
            warn!(?err, "render failed");
        }
    }
}

/// Build the editor UI inside the element with id `root_id`.
///
/// Stored values are loaded before the first paint. `config_json` is an
/// optional partial `PageConfig` object.
#[wasm_bindgen]
pub fn mount(root_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    let config = resolve_config(config_json.as_deref());
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id `{}`", root_id)))?;

    let editor = PageEditor::load(BrowserStore::open(), config);
    let dom = DomView::build(&document, &root)?;
    dom.fill_inputs(editor.title(), editor.content());

    let app = Rc::new(App {
        editor: RefCell::new(editor),
        dom,
    });
    app.refresh();

    {
        let app_ref = app.clone();
        listen(app.dom.title_input.as_ref(), "input", move |_| {
            let title = app_ref.dom.title_input.value();
            app_ref.editor.borrow_mut().set_title(title);
            app_ref.refresh();
        })?;
    }

    {
        let app_ref = app.clone();
        listen(app.dom.content_input.as_ref(), "input", move |_| {
            let content = app_ref.dom.content_input.value();
            app_ref.editor.borrow_mut().set_content(content);
            app_ref.refresh();
        })?;
    }

    {
        let app_ref = app.clone();
        listen(app.dom.copy_button.as_ref(), "click", move |_| {
            // Copy a snapshot so no borrow is held across the await
            let content = app_ref.editor.borrow().content().to_string();
            wasm_bindgen_futures::spawn_local(async move {
                copy_content(&BrowserClipboard, &AlertNotifier, &content).await;
            });
        })?;
    }

    {
        let app_ref = app.clone();
        listen(app.dom.download_button.as_ref(), "click", move |_| {
            let request = app_ref.editor.borrow().download_request();
            if let Err(err) = trigger_download(&request) {
                warn!(%err, "download failed");
            }
        })?;
    }

    info!(root_id, "page builder mounted");
    Ok(())
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}
