use gloo_timers::callback::Timeout;
use hackmate_common::markers::MAIN_CONTAINER;
use hackmate_common::markup::{alert_html, AlertLevel};

use crate::dom;

/// Insert a dismissible banner at the top of `main .container` and drop it
/// after `dismiss_ms` unless the user already closed it.
pub fn show(message: &str, level: AlertLevel, dismiss_ms: u64) {
    let Some(document) = dom::document() else {
        return;
    };
    let Ok(Some(container)) = document.query_selector(MAIN_CONTAINER) else {
        tracing::debug!("No {} to show alert in", MAIN_CONTAINER);
        return;
    };
    let alert = match document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create alert: {:?}", e);
            return;
        }
    };
    alert.set_class_name(&level.class_name());
    alert.set_inner_html(&alert_html(message));

    if let Err(e) = container.insert_before(&alert, container.first_child().as_ref()) {
        tracing::error!("Failed to insert alert: {:?}", e);
        return;
    }

    Timeout::new(dom::millis(dismiss_ms), move || {
        if alert.parent_node().is_some() {
            alert.remove();
        }
    })
    .forget();
}
