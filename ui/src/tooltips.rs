use hackmate_common::markers::TOOLTIP_TRIGGER;

use crate::bootstrap::BootstrapTooltip;
use crate::dom;

pub fn init() {
    let Some(document) = dom::document() else {
        return;
    };
    for element in dom::query_all(&document, TOOLTIP_TRIGGER) {
        if let Err(e) = BootstrapTooltip::new(&element) {
            tracing::warn!("Bootstrap tooltips unavailable: {:?}", e);
            return;
        }
    }
}
