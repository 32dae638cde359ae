//! The REST seam between decision logic and the network.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ApiError;

/// Body of `GET /api/notifications/unread_count/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    #[serde(default)]
    pub unread_count: i64,
}

/// Body of the join/register actions, kept as whatever JSON the server sent.
///
/// Only a truthy `message` drives the UI; `error` is read for logging. Any
/// other shape, including a non-object body, is passed through.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct ActionResponse {
    body: Value,
}

impl From<Value> for ActionResponse {
    fn from(body: Value) -> Self {
        Self { body }
    }
}

impl From<ActionResponse> for Value {
    fn from(response: ActionResponse) -> Self {
        response.body
    }
}

impl ActionResponse {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self::from(json!({ "message": message.into() }))
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Alert text for a truthy `message` field.
    pub fn message(&self) -> Option<String> {
        self.text_field("message")
    }

    pub fn error(&self) -> Option<String> {
        self.text_field("error")
    }

    fn text_field(&self, name: &str) -> Option<String> {
        self.body
            .get(name)
            .filter(|v| is_truthy(v))
            .map(display_text)
    }
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a JSON value as page text. Field-error lists join with commas.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinTeamBody {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageBody {
    pub conversation: Value,
    pub content: String,
}

/// One async operation per server interaction.
///
/// Implementations return the parsed body of any completed round trip,
/// whatever the HTTP status, and an [`ApiError`] only for transport or
/// decoding failures.
#[allow(async_fn_in_trait)]
pub trait Api {
    async fn unread_count(&self) -> Result<UnreadCount, ApiError>;

    async fn current_user(&self) -> Result<Value, ApiError>;

    async fn create_team(&self, team: &Value) -> Result<Value, ApiError>;

    async fn join_team(&self, team_id: &str, message: &str) -> Result<ActionResponse, ApiError>;

    async fn register_for_event(&self, event_id: &str) -> Result<ActionResponse, ApiError>;

    async fn send_message(&self, conversation: &Value, content: &str) -> Result<Value, ApiError>;
}

/// The current user, or `None` when the request fails.
pub async fn current_user_or_none<A: Api>(api: &A) -> Option<Value> {
    match api.current_user().await {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::error!("Error fetching current user: {}", e);
            None
        }
    }
}
