use hackmate_common::markers::{
    ANIMATE_ON_SCROLL, FADE_IN_CLASS, SCROLL_ROOT_MARGIN, SCROLL_THRESHOLD,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

/// Fade in `.animate-on-scroll` elements as they enter the viewport.
/// Elements stay observed; adding the class again is a no-op.
pub fn init() {
    let Some(document) = dom::document() else {
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(FADE_IN_CLASS);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(SCROLL_THRESHOLD));
    options.set_root_margin(SCROLL_ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                tracing::warn!("IntersectionObserver unavailable: {:?}", e);
                return;
            }
        };
    callback.forget();

    for element in dom::query_all(&document, ANIMATE_ON_SCROLL) {
        observer.observe(&element);
    }
}
