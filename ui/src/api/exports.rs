//! Functions other page scripts call on the wasm module, mirroring the old
//! `window.HackMate` object.

use hackmate_common::api::{current_user_or_none, Api};
use hackmate_common::error::ApiError;
use hackmate_common::flows::View;
use hackmate_common::markup::{AlertLevel, ButtonVariant, ModalButton, ModalSpec};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::state;

#[derive(Deserialize)]
struct ButtonArg {
    text: String,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[wasm_bindgen(js_name = getCurrentUser)]
pub async fn get_current_user() -> Result<JsValue, JsValue> {
    match current_user_or_none(&state::client()).await {
        Some(user) => to_js(&user),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen(js_name = createTeam)]
pub async fn create_team(team: JsValue) -> Result<JsValue, JsValue> {
    let team: Value = serde_wasm_bindgen::from_value(team)?;
    let created = state::client().create_team(&team).await.map_err(to_js_error)?;
    to_js(&created)
}

#[wasm_bindgen(js_name = joinTeam)]
pub async fn join_team(team_id: JsValue, message: Option<String>) -> Result<JsValue, JsValue> {
    let response = state::client()
        .join_team(&id_string(&team_id), message.as_deref().unwrap_or_default())
        .await
        .map_err(to_js_error)?;
    to_js(&response)
}

#[wasm_bindgen(js_name = registerForEvent)]
pub async fn register_for_event(event_id: JsValue) -> Result<JsValue, JsValue> {
    let response = state::client()
        .register_for_event(&id_string(&event_id))
        .await
        .map_err(to_js_error)?;
    to_js(&response)
}

#[wasm_bindgen(js_name = sendMessage)]
pub async fn send_message(conversation_id: JsValue, content: String) -> Result<JsValue, JsValue> {
    let conversation: Value = serde_wasm_bindgen::from_value(conversation_id)?;
    let message = state::client()
        .send_message(&conversation, &content)
        .await
        .map_err(to_js_error)?;
    to_js(&message)
}

#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert(message: String, level: Option<String>) {
    let level = level.as_deref().map(AlertLevel::parse).unwrap_or_default();
    state::view().show_alert(&message, level);
}

/// `buttons` is an array of `{ text, type }`; every button dismisses the modal.
#[wasm_bindgen(js_name = showModal)]
pub fn show_modal(title: String, content: String, buttons: JsValue) -> Result<(), JsValue> {
    let buttons: Vec<ButtonArg> = if buttons.is_undefined() || buttons.is_null() {
        Vec::new()
    } else {
        serde_wasm_bindgen::from_value(buttons)?
    };
    state::view().show_modal(ModalSpec {
        title,
        body_html: content,
        buttons: buttons
            .into_iter()
            .map(|b| ModalButton {
                label: b.text,
                variant: ButtonVariant::parse(b.kind.as_deref()),
                action: None,
            })
            .collect(),
    });
    Ok(())
}

#[wasm_bindgen(js_name = initNotifications)]
pub fn init_notifications() {
    crate::notifications::init();
}

#[wasm_bindgen(js_name = initSearchFilters)]
pub fn init_search_filters() {
    crate::search::init();
}

#[wasm_bindgen(js_name = initFormValidation)]
pub fn init_form_validation() {
    crate::forms::init();
}

#[wasm_bindgen(js_name = initAnimations)]
pub fn init_animations() {
    crate::animation::init();
}

#[wasm_bindgen(js_name = initTooltips)]
pub fn init_tooltips() {
    crate::tooltips::init();
}

/// Ids arrive as numbers or strings from templates.
fn id_string(id: &JsValue) -> String {
    if let Some(s) = id.as_string() {
        s
    } else if let Some(n) = id.as_f64() {
        n.to_string()
    } else {
        String::new()
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn to_js_error(e: ApiError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}
