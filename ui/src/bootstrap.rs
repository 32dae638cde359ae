//! Bindings to the Bootstrap bundle the page loads as the `bootstrap` global.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    pub type BootstrapModal;

    /// Fails when the Bootstrap bundle is not loaded.
    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Modal")]
    pub fn new(element: &Element) -> Result<BootstrapModal, JsValue>;

    #[wasm_bindgen(method, js_class = "Modal")]
    pub fn show(this: &BootstrapModal);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Tooltip)]
    pub type BootstrapTooltip;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    pub fn new(element: &Element) -> Result<BootstrapTooltip, JsValue>;
}
