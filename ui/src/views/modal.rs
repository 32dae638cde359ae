use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use hackmate_common::dispatch::ConfirmAction;
use hackmate_common::lifecycle::DialogHandles;
use hackmate_common::markers::DATA_MODAL_ACTION;
use hackmate_common::markup::ModalSpec;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::bootstrap::BootstrapModal;
use crate::dom;

type Listeners = Rc<RefCell<DialogHandles<Closure<dyn FnMut(Event)>>>>;

/// Append a fresh Bootstrap modal to `body`, show it, and remove it from the
/// document once it has finished hiding. Its listeners are dropped with it.
pub fn show(spec: &ModalSpec<ConfirmAction>) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let modal = match document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create modal: {:?}", e);
            return;
        }
    };
    modal.set_class_name("modal fade");
    modal.set_inner_html(&spec.render());

    if let Err(e) = body.append_child(&modal) {
        tracing::error!("Failed to attach modal: {:?}", e);
        return;
    }

    let listeners: Listeners = Rc::default();

    for (index, action) in spec.actions() {
        let selector = format!("[{}=\"{}\"]", DATA_MODAL_ACTION, index);
        if let Ok(Some(button)) = modal.query_selector(&selector) {
            let action = action.clone();
            if let Some(callback) = dom::attach(&button, "click", move |_| {
                crate::dispatcher::confirm(action.clone());
            }) {
                listeners.borrow_mut().hold(callback);
            }
        }
    }

    let releasing = listeners.clone();
    let on_hidden = dom::attach(&modal, "hidden.bs.modal", move |event| {
        if let Some(modal) = event
            .current_target()
            .and_then(|t| t.dyn_into::<Element>().ok())
        {
            modal.remove();
        }
        // Dropped on the next tick, once this handler has returned.
        let releasing = releasing.clone();
        Timeout::new(0, move || drop(releasing.borrow_mut().close())).forget();
    });
    if let Some(callback) = on_hidden {
        listeners.borrow_mut().hold(callback);
    }

    match BootstrapModal::new(&modal) {
        Ok(bs_modal) => bs_modal.show(),
        Err(e) => {
            tracing::warn!("Bootstrap modal unavailable: {:?}", e);
            modal.remove();
            let released = listeners.borrow_mut().close();
            drop(released);
        }
    }
}
