use std::cell::RefCell;
use std::rc::Rc;

use page_behaviors::tabs::{TabCommand, TabKey, TabState, TabTransition};
use page_behaviors::{Key, Result, aria_bool};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::dom::{Handles, Listener, Page, query_within, set_attr};

struct TabsView {
    tabs: Vec<Element>,
    panels: Vec<(Element, String)>,
    state: RefCell<TabState>,
}

impl TabsView {
    fn dispatch(&self, command: TabCommand) {
        let transition = self.state.borrow_mut().apply(command);
        match transition {
            Ok(transition) => self.render(transition),
            Err(e) => tracing::warn!("tab command dropped: {}", e),
        }
    }

    /// Write `aria-selected` on every tab and `hidden` on every panel.
    fn render(&self, transition: TabTransition) {
        let state = self.state.borrow();
        for (index, tab) in self.tabs.iter().enumerate() {
            set_attr(tab, "aria-selected", aria_bool(state.is_selected(index)));
        }
        for (panel, key) in &self.panels {
            if let Some(panel) = panel.dyn_ref::<HtmlElement>() {
                panel.set_hidden(!state.panel_visible(key));
            }
        }
        if let Some(tab) = transition
            .focus
            .and_then(|index| self.tabs.get(index))
            .and_then(|tab| tab.dyn_ref::<HtmlElement>())
        {
            let _ = tab.focus();
        }
    }
}

/// Bind the tablist. The first tab in document order starts selected.
pub fn mount(page: &Page) -> Result<Handles> {
    let markup = &page.config.markup;
    let mut handles = Handles::default();

    let Some(tablist) = page.query(&markup.tablist)? else {
        return Ok(handles);
    };
    let tabs = query_within(&tablist, &markup.tab)?;
    let keys: Vec<String> = tabs
        .iter()
        .map(|t| t.get_attribute(&markup.tab_key_attr).unwrap_or_default())
        .collect();
    let panels = page
        .query_all(&markup.tab_panel)?
        .into_iter()
        .map(|p| {
            let key = p.get_attribute(&markup.panel_key_attr).unwrap_or_default();
            (p, key)
        })
        .collect();

    let state = TabState::new(keys)?;
    let first = state.active_key().to_string();
    let view = Rc::new(TabsView {
        tabs,
        panels,
        state: RefCell::new(state),
    });

    for (index, tab) in view.tabs.iter().enumerate() {
        let on_click = Rc::clone(&view);
        handles.listen(Listener::new(tab, "click", move |_| {
            on_click.dispatch(TabCommand::Click(index));
        })?);

        let on_key = Rc::clone(&view);
        handles.listen(Listener::new(tab, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| Key::from_dom(&k.key())) else {
                return;
            };
            if let Some(direction) = TabKey::from_key(key) {
                event.prevent_default();
                on_key.dispatch(TabCommand::Key {
                    from: index,
                    direction,
                });
            }
        })?);
    }

    view.dispatch(TabCommand::Select(first));
    tracing::debug!(tabs = view.tabs.len(), "tabs ready");
    Ok(handles)
}
