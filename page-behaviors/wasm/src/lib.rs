//! WASM bindings for the income awareness site's page behaviors.
//!
//! The site's HTML is rendered ahead of time; this module only attaches
//! behavior to it. On start it reads the optional inline config block,
//! installs the console logger and, once the document is parsed, binds every
//! controller against whatever matching elements the page has. Controllers
//! whose elements are absent bind nothing.
//!
//! State machines live in the `page-behaviors` crate; this crate owns the
//! listeners, observers and animation frames that drive them.

use std::cell::RefCell;

use page_behaviors::config::CONFIG_ELEMENT_ID;
use page_behaviors::{BehaviorConfig, Result};
use wasm_bindgen::prelude::*;
use web_sys::Document;

mod clipboard;
mod counters;
mod dom;
mod drawers;
mod flip;
mod logging;
mod nav;
mod quiz;
mod share;
mod tabs;

use dom::{Handles, Page};

thread_local! {
    /// Handles for the automatic mount; they live as long as the page.
    static AUTO_MOUNTED: RefCell<Option<PageHandle>> = const { RefCell::new(None) };
}

/// Listeners and observers bound to the page. Dropping or disposing the
/// handle unbinds all of them.
#[wasm_bindgen]
pub struct PageHandle {
    handles: Handles,
}

#[wasm_bindgen]
impl PageHandle {
    /// Remove every listener and disconnect the counter observer.
    pub fn dispose(self) {
        tracing::debug!(
            listeners = self.handles.listener_count(),
            "page behaviors disposed"
        );
    }

    #[wasm_bindgen(getter, js_name = listenerCount)]
    pub fn listener_count(&self) -> usize {
        self.handles.listener_count()
    }

    #[wasm_bindgen(getter, js_name = observerCount)]
    pub fn observer_count(&self) -> usize {
        self.handles.observer_count()
    }
}

/// Inline config block contents, if the page carries one.
fn read_config(document: &Document) -> BehaviorConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    BehaviorConfig::load(raw.as_deref())
}

type Mount = fn(&Page) -> Result<Handles>;

const CONTROLLERS: [(&str, Mount); 7] = [
    ("nav", nav::mount),
    ("counters", counters::mount),
    ("tabs", tabs::mount),
    ("drawers", drawers::mount),
    ("flip", flip::mount),
    ("quiz", quiz::mount),
    ("share", share::mount),
];

/// Bind every controller. A controller that fails to bind is logged and
/// skipped; the others still bind.
fn mount_all(page: &Page) -> PageHandle {
    let mut handles = Handles::default();
    for (name, mount) in CONTROLLERS {
        match mount(page) {
            Ok(bound) => handles.merge(bound),
            Err(e) => tracing::warn!(controller = name, "not bound: {}", e),
        }
    }
    tracing::info!(
        listeners = handles.listener_count(),
        observers = handles.observer_count(),
        "page behaviors ready"
    );
    PageHandle { handles }
}

fn current_page() -> std::result::Result<Page, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    Page::current(read_config(&document)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Bind all page behaviors now and return the handle that unbinds them.
///
/// If the page was already mounted on start, that mount is disposed first so
/// no element ends up with two listeners; the returned handle then owns the
/// only binding. Set `auto_mount: false` in the config block to skip the
/// automatic mount entirely.
#[wasm_bindgen(js_name = mountPage)]
pub fn mount_page() -> std::result::Result<PageHandle, JsValue> {
    let page = current_page()?;
    if let Some(previous) = AUTO_MOUNTED.with(|slot| slot.borrow_mut().take()) {
        tracing::warn!("mountPage() called after the automatic mount; replacing it");
        previous.dispose();
    }
    Ok(mount_all(&page))
}

/// Crate version, for smoke checks from the console.
#[wasm_bindgen]
pub fn version() -> String {
    format!("page-behaviors v{}", page_behaviors::VERSION)
}

fn auto_mount(page: Page) {
    let handle = mount_all(&page);
    AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle));
}

/// Module entry point: panic hook, logger, then mount once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let page = match current_page() {
        Ok(page) => page,
        Err(e) => {
            web_sys::console::warn_2(&JsValue::from_str("page behaviors disabled:"), &e);
            return;
        }
    };
    logging::init(page.config.tracing_level());

    if !page.config.auto_mount {
        tracing::debug!("auto mount disabled, waiting for mountPage()");
        return;
    }

    let loading = js_sys::Reflect::get(&page.document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading");

    if !loading {
        auto_mount(page);
        return;
    }

    let document = page.document.clone();
    let on_ready = Closure::once_into_js(move || auto_mount(page));
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        tracing::warn!("DOMContentLoaded listener failed: {}", dom::js_err(e));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn mount_page_replaces_the_automatic_mount() {
        let page = current_page().unwrap();
        page.document.body().unwrap().set_inner_html(
            r#"<div class="stat" id="stat"><div class="drawer" id="drawer"></div></div>"#,
        );
        auto_mount(current_page().unwrap());
        assert!(AUTO_MOUNTED.with(|slot| slot.borrow().is_some()));

        let handle = mount_page().unwrap();
        assert!(AUTO_MOUNTED.with(|slot| slot.borrow().is_none()));

        // one click, one toggle: the automatic listeners are gone
        let stat = page.document.get_element_by_id("stat").unwrap();
        stat.dyn_ref::<HtmlElement>().unwrap().click();
        let drawer = page.document.get_element_by_id("drawer").unwrap();
        assert!(drawer.class_list().contains("open"));
        assert_eq!(stat.get_attribute("aria-expanded").as_deref(), Some("true"));
        handle.dispose();
    }
}
