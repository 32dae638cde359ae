use hackmate_common::dispatch::ConfirmAction;
use hackmate_common::flows::{self, View};
use hackmate_common::markers::JOIN_MESSAGE_ID;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlTextAreaElement};

use crate::{dom, state};

/// One delegated click listener for join/register triggers.
///
/// Only the exact click target is inspected, not its ancestors.
pub fn init(document: &Document) {
    dom::listen(document, "click", |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let classes = target.class_list();
        let Some(action) =
            ConfirmAction::from_target(|c| classes.contains(c), |name| target.get_attribute(name))
        else {
            return;
        };
        event.prevent_default();
        tracing::debug!("Confirming {:?}", action);
        state::view().show_modal(action.dialog());
    });
}

/// Run a confirmed action. Reads the join message before the modal closes.
pub fn confirm(action: ConfirmAction) {
    let message = if action.takes_message() {
        join_message()
    } else {
        String::new()
    };
    let config = state::config();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = flows::run_confirmed(
            &state::client(),
            &state::view(),
            &action,
            &message,
            config.reload_delay_ms,
        )
        .await;
        tracing::info!("{:?} finished: {:?}", action, outcome);
    });
}

fn join_message() -> String {
    dom::document()
        .and_then(|d| d.get_element_by_id(JOIN_MESSAGE_ID))
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|ta| ta.value())
        .unwrap_or_default()
}
