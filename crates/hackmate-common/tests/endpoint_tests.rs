use hackmate_common::api::{ActionResponse, JoinTeamBody, SendMessageBody};
use hackmate_common::config::ClientConfig;
use hackmate_common::endpoints::*;
use serde_json::json;

#[test]
fn endpoint_paths() {
    assert_eq!(Endpoint::UnreadCount.path(), "/api/notifications/unread_count/");
    assert_eq!(Endpoint::CurrentUser.path(), "/api/users/me/");
    assert_eq!(Endpoint::CreateTeam.path(), "/api/teams/");
    assert_eq!(
        Endpoint::JoinTeam { team_id: "42".into() }.path(),
        "/api/teams/42/join/"
    );
    assert_eq!(
        Endpoint::RegisterEvent { event_id: "9".into() }.path(),
        "/api/events/9/register/"
    );
    assert_eq!(Endpoint::SendMessage.path(), "/api/messages/");
}

#[test]
fn only_reads_are_gets() {
    assert_eq!(Endpoint::UnreadCount.method(), Method::Get);
    assert!(!Endpoint::CurrentUser.is_mutating());
    assert!(Endpoint::CreateTeam.is_mutating());
    assert!(Endpoint::SendMessage.is_mutating());
    assert_eq!(Endpoint::SendMessage.method().as_str(), "POST");
}

#[test]
fn request_bodies_serialize_as_expected() {
    let join = serde_json::to_value(JoinTeamBody { message: String::new() }).unwrap();
    assert_eq!(join, json!({ "message": "" }));

    let msg = serde_json::to_value(SendMessageBody {
        conversation: json!(5),
        content: "hi".into(),
    })
    .unwrap();
    assert_eq!(msg, json!({ "conversation": 5, "content": "hi" }));
}

#[test]
fn action_response_keeps_unknown_fields() {
    let body: ActionResponse =
        serde_json::from_value(json!({ "message": "Joined", "id": 3 })).unwrap();
    assert_eq!(body.message().as_deref(), Some("Joined"));
    assert_eq!(body.body().get("id"), Some(&json!(3)));
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "message": "Joined", "id": 3 }));
}

#[test]
fn action_response_accepts_any_json_shape() {
    let errors: ActionResponse = serde_json::from_value(json!({
        "message": ["Ensure this field has no more than 500 characters."]
    }))
    .unwrap();
    assert_eq!(
        errors.message().as_deref(),
        Some("Ensure this field has no more than 500 characters.")
    );

    let bare: ActionResponse = serde_json::from_value(json!("ok")).unwrap();
    assert_eq!(bare.message(), None);
    assert_eq!(bare.body(), &json!("ok"));

    let null: ActionResponse = serde_json::from_str("null").unwrap();
    assert_eq!(null.message(), None);
}

#[test]
fn message_uses_javascript_truthiness() {
    let message = |body: serde_json::Value| ActionResponse::from(body).message();
    assert_eq!(message(json!({ "message": "" })), None);
    assert_eq!(message(json!({ "message": 0 })), None);
    assert_eq!(message(json!({ "message": null })), None);
    assert_eq!(message(json!({ "message": false })), None);
    assert_eq!(message(json!({ "message": 5 })).as_deref(), Some("5"));
    assert_eq!(message(json!({ "message": ["a", "b"] })).as_deref(), Some("a,b"));
}

#[test]
fn config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.poll_interval_ms, 30_000);
    assert_eq!(config.debounce_ms, 300);
    assert_eq!(config.alert_dismiss_ms, 5_000);
    assert_eq!(config.reload_delay_ms, 1_500);
    assert_eq!(config.url("/api/users/me/"), "/api/users/me/");
}

#[test]
fn config_partial_override() {
    let config = ClientConfig::from_json(r#"{"api_base": "https://hackmate.example/", "debounce_ms": 100}"#);
    assert_eq!(config.debounce_ms, 100);
    assert_eq!(config.poll_interval_ms, 30_000);
    assert_eq!(
        config.url("/api/teams/"),
        "https://hackmate.example/api/teams/"
    );
}

#[test]
fn config_malformed_falls_back() {
    assert_eq!(ClientConfig::from_json("{not json"), ClientConfig::default());
}
