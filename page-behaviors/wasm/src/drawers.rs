use std::cell::Cell;
use std::rc::Rc;

use page_behaviors::drawer::{Drawer, DrawerCommand, DrawerEffect};
use page_behaviors::{Key, Result, aria_bool};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};

use crate::dom::{Handles, Listener, Page, set_attr, set_class};

/// Stat drawers: click or Enter/Space on a stat toggles its `.drawer`.
pub fn mount(page: &Page) -> Result<Handles> {
    let mut handles = Handles::default();

    for stat in page.query_all(&page.config.markup.stat)? {
        let state = Rc::new(Cell::new(Drawer::new()));

        let on_click = Rc::clone(&state);
        let config = Rc::clone(&page.config);
        let target = stat.clone();
        handles.listen(Listener::new(&stat, "click", move |_| {
            let Ok(Some(drawer)) = target.query_selector(&config.markup.drawer) else {
                return;
            };
            let mut current = on_click.get();
            if let DrawerEffect::Toggled { open } = current.apply(DrawerCommand::Click) {
                set_class(&drawer, &config.markup.drawer_open_class, open);
                set_attr(&target, "aria-expanded", aria_bool(open));
            }
            on_click.set(current);
        })?);

        let on_key = Rc::clone(&state);
        let target = stat.clone();
        handles.listen(Listener::new(&stat, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| Key::from_dom(&k.key())) else {
                return;
            };
            let mut current = on_key.get();
            if current.apply(DrawerCommand::Key(key)) == DrawerEffect::ActivateByKey {
                event.prevent_default();
                if let Some(stat) = target.dyn_ref::<HtmlElement>() {
                    stat.click();
                }
            }
        })?);
    }

    Ok(handles)
}
