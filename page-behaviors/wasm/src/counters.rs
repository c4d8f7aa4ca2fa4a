//! Counter animation: intersection observer trigger plus an animation-frame
//! loop per counter.

use std::cell::RefCell;
use std::rc::Rc;

use page_behaviors::counter::{Counter, CounterSpec, CounterStep, Motion};
use page_behaviors::Result;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::dom::{Handles, Observer, Page, js_err};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn now_ms(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or_default()
}

type Tracked = Rc<RefCell<Counter>>;

pub fn mount(page: &Page) -> Result<Handles> {
    let markup = &page.config.markup;
    let mut tracked: Vec<(Element, Tracked)> = Vec::new();

    for element in page.query_all(&markup.counters)? {
        let raw = element.get_attribute(&markup.count_attr).unwrap_or_default();
        let suffix = element.get_attribute(&markup.suffix_attr);
        match CounterSpec::parse(&raw, suffix.as_deref()) {
            Ok(spec) => tracked.push((element, Rc::new(RefCell::new(Counter::new(spec))))),
            Err(e) => tracing::warn!("counter left as-is: {}", e),
        }
    }

    let mut handles = Handles::default();
    if tracked.is_empty() {
        return Ok(handles);
    }

    let window = page.window.clone();
    let duration_ms = page.config.counter.duration_ms;
    let targets = tracked.clone();

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            let Some((element, counter)) = targets
                .iter()
                .find(|(el, _)| AsRef::<JsValue>::as_ref(el) == AsRef::<JsValue>::as_ref(&target))
            else {
                continue;
            };

            let motion = Motion::from_reduced_flag(prefers_reduced_motion(&window));
            let step = counter
                .borrow_mut()
                .on_visible(now_ms(&window), motion, duration_ms);
            observer.unobserve(&target);

            match step {
                CounterStep::Render { text, .. } => element.set_text_content(Some(&text)),
                CounterStep::Started => {
                    run_frames(&window, element.clone(), Rc::clone(counter));
                }
                CounterStep::Ignored => {}
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(page.config.counter.visibility_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_err)?;

    for (element, _) in &tracked {
        observer.observe(element);
    }
    tracing::debug!(counters = tracked.len(), "observing counters");

    handles.observe(Observer::new(observer, callback));
    Ok(handles)
}

/// Drive one counter's tween on animation frames until it reports done.
fn run_frames(window: &Window, element: Element, counter: Tracked) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let element_for_cb = element.clone();
    let counter_for_cb = Rc::clone(&counter);

    let cb = Closure::wrap(Box::new(move |now: f64| {
        let step = counter_for_cb.borrow_mut().tick(now);
        if let CounterStep::Render { text, more } = step {
            element_for_cb.set_text_content(Some(&text));
            if more {
                let scheduled = holder_for_cb
                    .borrow()
                    .as_ref()
                    .map(|cb| {
                        window_for_cb
                            .request_animation_frame(cb.as_ref().unchecked_ref())
                            .is_ok()
                    })
                    .unwrap_or(false);
                if scheduled {
                    return;
                }
                land_on_target(&element_for_cb, &counter_for_cb);
            }
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        land_on_target(&element, &counter);
    }
}

/// No frame scheduler available: show the final value.
fn land_on_target(element: &Element, counter: &Tracked) {
    tracing::debug!("animation frame unavailable, skipping tween");
    element.set_text_content(Some(&counter.borrow().spec().final_text()));
}
