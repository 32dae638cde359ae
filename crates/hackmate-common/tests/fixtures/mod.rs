#![allow(dead_code)]

use std::cell::RefCell;

use hackmate_common::api::{ActionResponse, Api, UnreadCount};
use hackmate_common::dispatch::ConfirmAction;
use hackmate_common::error::ApiError;
use hackmate_common::flows::View;
use hackmate_common::markup::{AlertLevel, ModalSpec};
use serde_json::{json, Value};

/// Scripted API: every operation answers with the configured result and
/// records its arguments.
pub struct MockApi {
    pub unread: Result<UnreadCount, ApiError>,
    pub action: Result<ActionResponse, ApiError>,
    pub user: Result<Value, ApiError>,
    pub calls: RefCell<Vec<String>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            unread: Ok(UnreadCount::default()),
            action: Ok(ActionResponse::default()),
            user: Ok(json!({ "username": "alice" })),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MockApi {
    pub fn answering(action: Result<ActionResponse, ApiError>) -> Self {
        Self {
            action,
            ..Self::default()
        }
    }

    pub fn with_unread(unread: Result<UnreadCount, ApiError>) -> Self {
        Self {
            unread,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Api for MockApi {
    async fn unread_count(&self) -> Result<UnreadCount, ApiError> {
        self.record("unread_count".into());
        self.unread.clone()
    }

    async fn current_user(&self) -> Result<Value, ApiError> {
        self.record("current_user".into());
        self.user.clone()
    }

    async fn create_team(&self, team: &Value) -> Result<Value, ApiError> {
        self.record(format!("create_team {}", team));
        Ok(team.clone())
    }

    async fn join_team(&self, team_id: &str, message: &str) -> Result<ActionResponse, ApiError> {
        self.record(format!("join_team {} {:?}", team_id, message));
        self.action.clone()
    }

    async fn register_for_event(&self, event_id: &str) -> Result<ActionResponse, ApiError> {
        self.record(format!("register_for_event {}", event_id));
        self.action.clone()
    }

    async fn send_message(&self, conversation: &Value, content: &str) -> Result<Value, ApiError> {
        self.record(format!("send_message {} {:?}", conversation, content));
        Ok(json!({ "conversation": conversation, "content": content }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    Alert(String, AlertLevel),
    Modal(String),
    Loading(bool),
    Reload(u64),
}

/// View that records what it was asked to render.
#[derive(Default)]
pub struct RecordingView {
    pub events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn reloads(&self) -> Vec<u64> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Reload(delay) => Some(delay),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<(String, AlertLevel)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Alert(text, level) => Some((text, level)),
                _ => None,
            })
            .collect()
    }
}

impl View for RecordingView {
    fn show_alert(&self, message: &str, level: AlertLevel) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Alert(message.to_string(), level));
    }

    fn show_modal(&self, spec: ModalSpec<ConfirmAction>) {
        self.events.borrow_mut().push(ViewEvent::Modal(spec.title));
    }

    fn set_loading(&self, busy: bool) {
        self.events.borrow_mut().push(ViewEvent::Loading(busy));
    }

    fn schedule_reload(&self, delay_ms: u64) {
        self.events.borrow_mut().push(ViewEvent::Reload(delay_ms));
    }
}
