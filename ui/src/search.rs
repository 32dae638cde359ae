//! Debounced text search and category filtering over server-rendered lists.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use hackmate_common::filter::{category_visibility, normalize_term, search_visibility};
use hackmate_common::markers::{
    DATA_CATEGORY, FILTERABLE_ITEM, FILTER_SELECT, SEARCHABLE_ITEM, SEARCH_INPUT,
};
use hackmate_common::schedule::Debouncer;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::{dom, state};

pub fn init() {
    let Some(document) = dom::document() else {
        return;
    };
    let wait = state::config().debounce_ms;

    for input in dom::query_all(&document, SEARCH_INPUT) {
        let debouncer = Rc::new(RefCell::new(Debouncer::new(wait)));
        let source = input.clone();
        dom::listen(&input, "input", move |_| {
            let term = normalize_term(&control_value(&source));
            let deadline = debouncer.borrow_mut().trigger(dom::now_ms(), term);
            let debouncer = debouncer.clone();
            Timeout::new(dom::millis(wait), move || {
                // A later keystroke moves the deadline; this timer is then stale.
                let term = debouncer.borrow_mut().advance(deadline);
                if let Some(term) = term {
                    apply_search(&term);
                }
            })
            .forget();
        });
    }

    for select in dom::query_all(&document, FILTER_SELECT) {
        let source = select.clone();
        dom::listen(&select, "change", move |_| {
            apply_filter(&control_value(&source));
        });
    }
}

/// Show `.searchable-item`s whose text contains `term`, hide the rest.
pub fn apply_search(term: &str) {
    let Some(document) = dom::document() else {
        return;
    };
    for item in dom::query_all(&document, SEARCHABLE_ITEM) {
        let text = item.text_content().unwrap_or_default();
        dom::set_display(&item, search_visibility(&text, term).display_value());
    }
}

/// Show `.filterable-item`s in the selected category (or all of them).
pub fn apply_filter(selected: &str) {
    let Some(document) = dom::document() else {
        return;
    };
    for item in dom::query_all(&document, FILTERABLE_ITEM) {
        let category = item.get_attribute(DATA_CATEGORY);
        dom::set_display(
            &item,
            category_visibility(selected, category.as_deref()).display_value(),
        );
    }
}

fn control_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        element.get_attribute("value").unwrap_or_default()
    }
}
