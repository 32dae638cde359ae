//! The DOM side of [`View`]: alert banners, Bootstrap modals and the page-wide
//! loading indicator.

pub mod alert;
pub mod modal;

use gloo_timers::callback::Timeout;
use hackmate_common::config::ClientConfig;
use hackmate_common::dispatch::ConfirmAction;
use hackmate_common::flows::View;
use hackmate_common::markers::LOADING_CLASS;
use hackmate_common::markup::{AlertLevel, ModalSpec};

use crate::dom;

#[derive(Clone, Debug)]
pub struct DomView {
    alert_dismiss_ms: u64,
}

impl DomView {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            alert_dismiss_ms: config.alert_dismiss_ms,
        }
    }
}

impl View for DomView {
    fn show_alert(&self, message: &str, level: AlertLevel) {
        alert::show(message, level, self.alert_dismiss_ms);
    }

    fn show_modal(&self, spec: ModalSpec<ConfirmAction>) {
        modal::show(&spec);
    }

    fn set_loading(&self, busy: bool) {
        let Some(body) = dom::document().and_then(|d| d.body()) else {
            return;
        };
        if busy {
            let _ = body.class_list().add_1(LOADING_CLASS);
            let _ = body.style().set_property("position", "relative");
        } else {
            let _ = body.class_list().remove_1(LOADING_CLASS);
        }
    }

    fn schedule_reload(&self, delay_ms: u64) {
        Timeout::new(dom::millis(delay_ms), || {
            if let Some(window) = dom::window() {
                if let Err(e) = window.location().reload() {
                    tracing::error!("Reload failed: {:?}", e);
                }
            }
        })
        .forget();
    }
}
