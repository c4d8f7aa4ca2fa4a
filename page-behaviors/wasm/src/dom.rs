//! Small DOM helpers shared by the controllers: element queries, listener
//! ownership and the page context.

use std::rc::Rc;

use page_behaviors::{BehaviorConfig, BehaviorError, Result};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, IntersectionObserver, NodeList, Window};

/// Convert a thrown JS value into the crate error.
pub fn js_err(value: JsValue) -> BehaviorError {
    BehaviorError::Dom(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// Everything a controller needs to bind itself.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Rc<BehaviorConfig>,
}

impl Page {
    pub fn current(config: BehaviorConfig) -> Result<Self> {
        let window = web_sys::window().ok_or(BehaviorError::MissingGlobal("window"))?;
        let document = window
            .document()
            .ok_or(BehaviorError::MissingGlobal("document"))?;
        Ok(Self {
            window,
            document,
            config: Rc::new(config),
        })
    }

    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        let list = self.document.query_selector_all(selector).map_err(js_err)?;
        Ok(elements(&list))
    }

    pub fn query(&self, selector: &str) -> Result<Option<Element>> {
        self.document.query_selector(selector).map_err(js_err)
    }
}

/// Element descendants of `root` matching `selector`.
pub fn query_within(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let list = root.query_selector_all(selector).map_err(js_err)?;
    Ok(elements(&list))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Set or clear a boolean class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        tracing::debug!("class {} not written: {}", class, js_err(e));
    }
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(e) = element.set_attribute(name, value) {
        tracing::debug!("attribute {} not written: {}", name, js_err(e));
    }
}

/// An event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// An intersection observer that disconnects when dropped.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new(
        observer: IntersectionObserver,
        callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    ) -> Self {
        Self {
            observer,
            _callback: callback,
        }
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Everything a mounted controller keeps alive.
#[derive(Default)]
pub struct Handles {
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
}

impl Handles {
    pub fn listen(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn observe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub fn merge(&mut self, other: Handles) {
        self.listeners.extend(other.listeners);
        self.observers.extend(other.observers);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
