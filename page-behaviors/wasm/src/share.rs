use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Function, Object, Reflect};
use page_behaviors::share::{CopyLinkLabel, ShareData, SharePlan, fallback_confirmation, plan_share};
use page_behaviors::{BehaviorConfig, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, Navigator, Window};

use crate::clipboard::copy_text;
use crate::dom::{Handles, Listener, Page, js_err};

/// `navigator.share`, when the platform has a native share sheet.
fn native_share(navigator: &Navigator) -> Option<Function> {
    Reflect::get(navigator, &JsValue::from_str("share"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn share_payload(data: &ShareData) -> std::result::Result<Object, JsValue> {
    let payload = Object::new();
    Reflect::set(&payload, &"title".into(), &data.title.as_str().into())?;
    Reflect::set(&payload, &"text".into(), &data.text.as_str().into())?;
    Reflect::set(&payload, &"url".into(), &data.url.as_str().into())?;
    Ok(payload)
}

async fn share_page(window: Window, config: Rc<BehaviorConfig>) {
    let Ok(url) = window.location().href() else {
        return;
    };
    let title = window.document().map(|d| d.title()).unwrap_or_default();
    let navigator = window.navigator();
    let share = native_share(&navigator);

    match plan_share(share.is_some(), &title, &url, &config.share) {
        SharePlan::Native(data) => {
            let Some(share) = share else { return };
            let promise = share_payload(&data)
                .and_then(|payload| share.call1(&navigator, &payload))
                .and_then(|value| value.dyn_into::<js_sys::Promise>());
            match promise {
                Ok(promise) => {
                    // cancellation rejects too; neither is surfaced
                    if let Err(e) = JsFuture::from(promise).await {
                        tracing::debug!("native share did not complete: {}", js_err(e));
                    }
                }
                Err(e) => tracing::debug!("native share unavailable: {}", js_err(e)),
            }
        }
        SharePlan::CopyThenConfirm { url, message } => {
            let outcome = copy_text(&window, &url).await;
            let _ = window.alert_with_message(fallback_confirmation(outcome, &message));
        }
    }
}

async fn copy_link(
    window: Window,
    button: Element,
    label: Rc<RefCell<CopyLinkLabel>>,
    config: Rc<BehaviorConfig>,
) {
    let Ok(url) = window.location().href() else {
        return;
    };
    let outcome = copy_text(&window, &url).await;
    tracing::debug!(?outcome, "copy link");

    let token = label.borrow_mut().on_copied();
    button.set_text_content(Some(label.borrow().text(&config.share)));

    Timeout::new(config.share.label_revert_ms, move || {
        let mut state = label.borrow_mut();
        if state.on_revert(token) {
            button.set_text_content(Some(state.text(&config.share)));
        }
    })
    .forget();
}

/// Bind every share and copy-link control on the page.
pub fn mount(page: &Page) -> Result<Handles> {
    let mut handles = Handles::default();

    for button in page.query_all(&page.config.markup.share_button)? {
        let window = page.window.clone();
        let config = Rc::clone(&page.config);
        handles.listen(Listener::new(&button, "click", move |_| {
            spawn_local(share_page(window.clone(), Rc::clone(&config)));
        })?);
    }

    for button in page.query_all(&page.config.markup.copy_link_button)? {
        let window = page.window.clone();
        let config = Rc::clone(&page.config);
        let label = Rc::new(RefCell::new(CopyLinkLabel::new()));
        let target = button.clone();
        handles.listen(Listener::new(&button, "click", move |_| {
            spawn_local(copy_link(
                window.clone(),
                target.clone(),
                Rc::clone(&label),
                Rc::clone(&config),
            ));
        })?);
    }

    Ok(handles)
}
