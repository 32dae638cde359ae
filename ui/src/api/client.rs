use hackmate_common::api::{ActionResponse, Api, JoinTeamBody, SendMessageBody, UnreadCount};
use hackmate_common::config::ClientConfig;
use hackmate_common::csrf::{csrf_token, CSRF_HEADER};
use hackmate_common::endpoints::Endpoint;
use hackmate_common::error::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

/// [`Api`] over `window.fetch` with same-origin credentials.
///
/// Bodies are parsed whatever the HTTP status; only transport and decoding
/// failures become errors.
#[derive(Clone, Debug)]
pub struct FetchClient {
    config: ClientConfig,
}

impl FetchClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let value = self.fetch_json(&endpoint, None).await?;
        decode(value)
    }

    /// Mutating request. Failures are logged here and returned to the caller.
    async fn post<B, T>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let result: Result<T, ApiError> = async {
            let body = body
                .map(serde_json::to_string)
                .transpose()
                .map_err(|e| ApiError::Encode(e.to_string()))?;
            let value = self.fetch_json(&endpoint, body).await?;
            decode(value)
        }
        .await;

        if let Err(e) = &result {
            tracing::error!("Error {}: {}", endpoint.describe(), e);
        }
        result
    }

    async fn fetch_json(&self, endpoint: &Endpoint, body: Option<String>) -> Result<JsValue, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(endpoint.method().as_str());
        opts.set_credentials(RequestCredentials::SameOrigin);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let url = self.config.url(&endpoint.path());
        let request = Request::new_with_str_and_init(&url, &opts).map_err(transport)?;
        if endpoint.is_mutating() {
            let headers = request.headers();
            headers
                .set("Content-Type", "application/json")
                .map_err(transport)?;
            headers
                .set(CSRF_HEADER, &csrf_token(&crate::dom::cookies()))
                .map_err(transport)?;
        }

        let window = crate::dom::window().ok_or_else(|| ApiError::Transport("no window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?;
        let resp: Response = resp_value.dyn_into().map_err(transport)?;

        tracing::trace!("{} {} -> {}", endpoint.method(), url, resp.status());

        let json = resp.json().map_err(decode_error)?;
        JsFuture::from(json).await.map_err(decode_error)
    }
}

impl Api for FetchClient {
    async fn unread_count(&self) -> Result<UnreadCount, ApiError> {
        self.get(Endpoint::UnreadCount).await
    }

    async fn current_user(&self) -> Result<Value, ApiError> {
        self.get(Endpoint::CurrentUser).await
    }

    async fn create_team(&self, team: &Value) -> Result<Value, ApiError> {
        self.post(Endpoint::CreateTeam, Some(team)).await
    }

    async fn join_team(&self, team_id: &str, message: &str) -> Result<ActionResponse, ApiError> {
        let body = JoinTeamBody {
            message: message.to_string(),
        };
        self.post(
            Endpoint::JoinTeam {
                team_id: team_id.to_string(),
            },
            Some(&body),
        )
        .await
    }

    async fn register_for_event(&self, event_id: &str) -> Result<ActionResponse, ApiError> {
        self.post::<(), _>(
            Endpoint::RegisterEvent {
                event_id: event_id.to_string(),
            },
            None,
        )
        .await
    }

    async fn send_message(&self, conversation: &Value, content: &str) -> Result<Value, ApiError> {
        let body = SendMessageBody {
            conversation: conversation.clone(),
            content: content.to_string(),
        };
        self.post(Endpoint::SendMessage, Some(&body)).await
    }
}

fn decode<T: DeserializeOwned>(value: JsValue) -> Result<T, ApiError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn transport(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", e))
}

fn decode_error(e: JsValue) -> ApiError {
    ApiError::Decode(format!("{:?}", e))
}
