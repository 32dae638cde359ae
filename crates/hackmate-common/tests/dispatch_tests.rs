use std::collections::HashMap;

use hackmate_common::dispatch::*;

fn target<'a>(
    classes: &'a [&'a str],
    attrs: &'a [(&'a str, &'a str)],
) -> Option<ConfirmAction> {
    let attrs: HashMap<&str, &str> = attrs.iter().copied().collect();
    ConfirmAction::from_target(
        |c| classes.iter().any(|k| *k == c),
        |name| attrs.get(name).map(|v| v.to_string()),
    )
}

#[test]
fn join_button_is_classified() {
    let action = target(
        &["btn", "join-team-btn"],
        &[("data-team-id", "7"), ("data-team-name", "Rustaceans")],
    );
    assert_eq!(
        action,
        Some(ConfirmAction::JoinTeam {
            team_id: "7".into(),
            team_name: "Rustaceans".into()
        })
    );
}

#[test]
fn register_button_is_classified() {
    let action = target(
        &["register-event-btn"],
        &[("data-event-id", "3"), ("data-event-title", "Spring Hack")],
    );
    assert_eq!(
        action,
        Some(ConfirmAction::RegisterEvent {
            event_id: "3".into(),
            title: "Spring Hack".into()
        })
    );
}

#[test]
fn other_clicks_are_ignored() {
    assert_eq!(target(&["btn", "btn-primary"], &[("data-team-id", "7")]), None);
}

#[test]
fn trigger_without_id_is_ignored() {
    assert_eq!(target(&["join-team-btn"], &[("data-team-name", "X")]), None);
    assert_eq!(target(&["register-event-btn"], &[]), None);
}

#[test]
fn missing_name_defaults_to_empty() {
    let action = target(&["join-team-btn"], &[("data-team-id", "1")]);
    assert_eq!(
        action,
        Some(ConfirmAction::JoinTeam {
            team_id: "1".into(),
            team_name: String::new()
        })
    );
}

#[test]
fn join_dialog_has_message_field_and_confirm_action() {
    let action = ConfirmAction::JoinTeam {
        team_id: "7".into(),
        team_name: "Rustaceans".into(),
    };
    let dialog = action.dialog();
    assert_eq!(dialog.title, "Join Rustaceans");
    assert!(dialog.body_html.contains("id=\"join-message\""));
    assert_eq!(dialog.buttons.len(), 2);
    assert_eq!(dialog.buttons[0].label, "Cancel");
    assert!(dialog.buttons[0].action.is_none());
    assert_eq!(dialog.buttons[1].label, "Join Team");
    let actions: Vec<_> = dialog.actions().collect();
    assert_eq!(actions, vec![(1, &action)]);
    assert!(action.takes_message());
}

#[test]
fn register_dialog() {
    let action = ConfirmAction::RegisterEvent {
        event_id: "3".into(),
        title: "Spring Hack".into(),
    };
    let dialog = action.dialog();
    assert_eq!(dialog.title, "Register for Spring Hack");
    assert!(!dialog.body_html.contains("textarea"));
    assert_eq!(dialog.buttons[1].label, "Register");
    assert_eq!(dialog.buttons[1].action.as_ref(), Some(&action));
    assert!(!action.takes_message());
}
