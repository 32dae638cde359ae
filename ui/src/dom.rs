use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlDocument, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// Milliseconds since the epoch, as the timers in `hackmate_common::schedule` expect.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Clamp a delay for `setTimeout`.
pub fn millis(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}

/// The raw `document.cookie` string, empty when unavailable.
pub fn cookies() -> String {
    document()
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}

/// Every element matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!("Bad selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_display(element: &Element, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("display", value);
    }
}

/// Attach a listener and hand back its closure; the listener works only while
/// the returned closure is alive.
pub fn attach<F>(target: &EventTarget, event: &str, handler: F) -> Option<Closure<dyn FnMut(Event)>>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        Ok(()) => Some(callback),
        Err(e) => {
            tracing::error!("Failed to attach {} listener: {:?}", event, e);
            None
        }
    }
}

/// Attach a listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    if let Some(callback) = attach(target, event, handler) {
        callback.forget();
    }
}
