use std::cell::RefCell;
use std::rc::Rc;

use page_behaviors::quiz::{ChoiceChange, QuizOutcome, QuizQuestion};
use page_behaviors::Result;
use page_behaviors::config::MarkupConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlInputElement};

use crate::dom::{Handles, Listener, Page, query_within, set_class};

/// Question blocks seen so far, keyed by their element.
#[derive(Default)]
struct Questions {
    seen: Vec<(Element, QuizQuestion)>,
}

impl Questions {
    fn get_mut(&mut self, block: &Element) -> &mut QuizQuestion {
        let block_value: &JsValue = block.as_ref();
        let index = match self
            .seen
            .iter()
            .position(|(el, _)| AsRef::<JsValue>::as_ref(el) == block_value)
        {
            Some(index) => index,
            None => {
                self.seen.push((block.clone(), QuizQuestion::new()));
                self.seen.len() - 1
            }
        };
        &mut self.seen[index].1
    }
}

pub fn mount(page: &Page) -> Result<Handles> {
    let mut handles = Handles::default();

    if let Some(quiz) = page.query(&page.config.markup.quiz)? {
        let questions = Rc::new(RefCell::new(Questions::default()));
        let config = Rc::clone(&page.config);
        handles.listen(Listener::new(&quiz, "change", move |event| {
            on_change(&event, &config.markup, &mut questions.borrow_mut());
        })?);
    }

    if let Some(reset) = page.query(&page.config.markup.quiz_reset)? {
        let window = page.window.clone();
        handles.listen(Listener::new(&reset, "click", move |_| {
            tracing::info!("quiz reset, reloading page");
            let _ = window.location().reload();
        })?);
    }

    Ok(handles)
}

fn on_change(event: &Event, markup: &MarkupConfig, questions: &mut Questions) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };

    let block = target.closest(&markup.question).ok().flatten();
    let feedback = block
        .as_ref()
        .and_then(|b| b.query_selector(&markup.feedback).ok().flatten());

    let change = ChoiceChange {
        is_choice: target.is_instance_of::<HtmlInputElement>(),
        name: target.get_attribute("name").unwrap_or_default(),
        correct_attr: target.get_attribute(&markup.correct_attr),
        has_feedback: feedback.is_some(),
    };
    let (Some(block), Some(feedback)) = (block, feedback) else {
        return;
    };

    let QuizOutcome::Answered { feedback: view, .. } = questions.get_mut(&block).on_change(&change) else {
        return;
    };

    set_class(&feedback, &markup.feedback_show_class, view.show);
    set_class(&feedback, &markup.feedback_bad_class, view.bad);

    if let Ok(inputs) = query_within(&block, "input") {
        for choice in inputs.iter().filter_map(|i| i.dyn_ref::<HtmlInputElement>()) {
            choice.set_disabled(true);
        }
    }
}
