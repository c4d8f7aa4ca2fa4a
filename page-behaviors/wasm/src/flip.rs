use std::cell::Cell;
use std::rc::Rc;

use page_behaviors::flip::FlipCard;
use page_behaviors::{Result, aria_bool};

use crate::dom::{Handles, Listener, Page, set_attr, set_class};

/// Flip cards: the card's button toggles the flipped class. Cards without a
/// button stay inert.
pub fn mount(page: &Page) -> Result<Handles> {
    let markup = &page.config.markup;
    let mut handles = Handles::default();

    for card in page.query_all(&markup.flip_card)? {
        let Ok(Some(button)) = card.query_selector(&markup.flip_button) else {
            continue;
        };

        let state = Rc::new(Cell::new(FlipCard::new()));
        let flipped_class = markup.flipped_class.clone();
        let target = button.clone();
        handles.listen(Listener::new(&button, "click", move |_| {
            let mut current = state.get();
            let flipped = current.toggle();
            state.set(current);
            set_class(&card, &flipped_class, flipped);
            set_attr(&target, "aria-expanded", aria_bool(flipped));
        })?);
    }

    Ok(handles)
}
