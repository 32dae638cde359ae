//! Classification of document clicks into confirmation actions.

use crate::markers::{
    DATA_EVENT_ID, DATA_EVENT_TITLE, DATA_TEAM_ID, DATA_TEAM_NAME, JOIN_MESSAGE_ID,
    JOIN_TEAM_BTN_CLASS, REGISTER_EVENT_BTN_CLASS,
};
use crate::markup::{ModalButton, ModalSpec};

/// An action the user must confirm in a modal before it is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    JoinTeam { team_id: String, team_name: String },
    RegisterEvent { event_id: String, title: String },
}

impl ConfirmAction {
    /// Classify a click target from its classes and attributes.
    ///
    /// A join button is checked before a register button. A trigger without
    /// an id attribute is ignored.
    pub fn from_target<C, D>(has_class: C, attr: D) -> Option<Self>
    where
        C: Fn(&str) -> bool,
        D: Fn(&str) -> Option<String>,
    {
        if has_class(JOIN_TEAM_BTN_CLASS) {
            let Some(team_id) = attr(DATA_TEAM_ID) else {
                tracing::warn!("Join button without {}", DATA_TEAM_ID);
                return None;
            };
            return Some(ConfirmAction::JoinTeam {
                team_id,
                team_name: attr(DATA_TEAM_NAME).unwrap_or_default(),
            });
        }
        if has_class(REGISTER_EVENT_BTN_CLASS) {
            let Some(event_id) = attr(DATA_EVENT_ID) else {
                tracing::warn!("Register button without {}", DATA_EVENT_ID);
                return None;
            };
            return Some(ConfirmAction::RegisterEvent {
                event_id,
                title: attr(DATA_EVENT_TITLE).unwrap_or_default(),
            });
        }
        None
    }

    /// The confirmation modal for this action.
    pub fn dialog(&self) -> ModalSpec<ConfirmAction> {
        match self {
            ConfirmAction::JoinTeam { team_name, .. } => ModalSpec {
                title: format!("Join {}", team_name),
                body_html: format!(
                    concat!(
                        "<p>Are you sure you want to join this team?</p>",
                        "<div class=\"mb-3\">",
                        "<label for=\"{id}\" class=\"form-label\">Message (optional)</label>",
                        "<textarea class=\"form-control\" id=\"{id}\" rows=\"3\" ",
                        "placeholder=\"Tell the team why you want to join...\"></textarea>",
                        "</div>"
                    ),
                    id = JOIN_MESSAGE_ID
                ),
                buttons: vec![
                    ModalButton::dismiss("Cancel"),
                    ModalButton::confirm("Join Team", self.clone()),
                ],
            },
            ConfirmAction::RegisterEvent { title, .. } => ModalSpec {
                title: format!("Register for {}", title),
                body_html: "<p>Are you sure you want to register for this event?</p>".to_string(),
                buttons: vec![
                    ModalButton::dismiss("Cancel"),
                    ModalButton::confirm("Register", self.clone()),
                ],
            },
        }
    }

    /// Whether confirming reads the optional `#join-message` textarea.
    pub fn takes_message(&self) -> bool {
        matches!(self, ConfirmAction::JoinTeam { .. })
    }

    /// Alert text shown when the request fails.
    pub fn failure_text(&self) -> &'static str {
        match self {
            ConfirmAction::JoinTeam { .. } => "Error joining team. Please try again.",
            ConfirmAction::RegisterEvent { .. } => "Error registering for event. Please try again.",
        }
    }
}
