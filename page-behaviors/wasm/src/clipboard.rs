//! Two-tier clipboard copy: async clipboard API, then a temporary text field
//! with the legacy copy command.

use page_behaviors::share::CopyOutcome;
use page_behaviors::{BehaviorError, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, Document, HtmlDocument, HtmlTextAreaElement, Navigator, Window};

use crate::dom::js_err;

/// `navigator.clipboard`, which is absent outside secure contexts.
fn async_clipboard(navigator: &Navigator) -> Option<Clipboard> {
    js_sys::Reflect::get(navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .map(JsCast::unchecked_into)
}

pub async fn copy_text(window: &Window, text: &str) -> CopyOutcome {
    if let Some(clipboard) = async_clipboard(&window.navigator()) {
        match JsFuture::from(clipboard.write_text(text)).await {
            Ok(_) => return CopyOutcome::Clipboard,
            Err(e) => tracing::debug!("clipboard write rejected: {}", js_err(e)),
        }
    }

    let Some(document) = window.document() else {
        return CopyOutcome::Failed;
    };
    match legacy_copy(&document, text) {
        Ok(true) => CopyOutcome::LegacyCommand,
        Ok(false) => {
            tracing::debug!("legacy copy command refused");
            CopyOutcome::Failed
        }
        Err(e) => {
            tracing::debug!("legacy copy failed: {}", e);
            CopyOutcome::Failed
        }
    }
}

/// Temporary text field, removed from the document on drop.
struct TempField(HtmlTextAreaElement);

impl Drop for TempField {
    fn drop(&mut self) {
        self.0.remove();
    }
}

fn legacy_copy(document: &Document, text: &str) -> Result<bool> {
    let field = document
        .create_element("textarea")
        .map_err(js_err)?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| BehaviorError::Dom("created element is not a textarea".into()))?;
    let field = TempField(field);

    field.0.set_value(text);
    let _ = field.0.set_attribute("readonly", "");
    let _ = field
        .0
        .set_attribute("style", "position:fixed;top:0;left:0;opacity:0;pointer-events:none");

    let body = document
        .body()
        .ok_or(BehaviorError::MissingGlobal("document.body"))?;
    body.append_child(&field.0).map_err(js_err)?;
    field.0.select();

    let html = document
        .dyn_ref::<HtmlDocument>()
        .ok_or(BehaviorError::MissingGlobal("HTML document"))?;
    html.exec_command("copy").map_err(js_err)
}
