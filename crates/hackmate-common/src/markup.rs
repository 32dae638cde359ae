//! HTML for the transient alert banner and the confirmation modal.
//!
//! Text that comes from the page or the server (messages, titles, button
//! labels) is escaped. Modal body markup is written by this crate and is
//! inserted verbatim.

use std::fmt::Write;

use crate::markers::DATA_MODAL_ACTION;

/// Bootstrap contextual colour of an alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertLevel {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
    Primary,
    Secondary,
}

impl AlertLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Success => "success",
            AlertLevel::Warning => "warning",
            AlertLevel::Danger => "danger",
            AlertLevel::Primary => "primary",
            AlertLevel::Secondary => "secondary",
        }
    }

    /// Parse a Bootstrap colour name; unknown names fall back to `info`.
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => AlertLevel::Success,
            "warning" => AlertLevel::Warning,
            "danger" => AlertLevel::Danger,
            "primary" => AlertLevel::Primary,
            "secondary" => AlertLevel::Secondary,
            _ => AlertLevel::Info,
        }
    }

    pub fn class_name(self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.as_str())
    }
}

/// Bootstrap button style. Buttons default to `secondary`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    #[default]
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Success => "success",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Warning => "warning",
            ButtonVariant::Info => "info",
        }
    }

    pub fn parse(name: Option<&str>) -> Self {
        match name {
            Some("primary") => ButtonVariant::Primary,
            Some("success") => ButtonVariant::Success,
            Some("danger") => ButtonVariant::Danger,
            Some("warning") => ButtonVariant::Warning,
            Some("info") => ButtonVariant::Info,
            _ => ButtonVariant::Secondary,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalButton<A> {
    pub label: String,
    pub variant: ButtonVariant,
    /// Run when the button is clicked, after the modal starts closing.
    pub action: Option<A>,
}

impl<A> ModalButton<A> {
    pub fn dismiss(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Secondary,
            action: None,
        }
    }

    pub fn confirm(label: impl Into<String>, action: A) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Primary,
            action: Some(action),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalSpec<A> {
    pub title: String,
    pub body_html: String,
    pub buttons: Vec<ModalButton<A>>,
}

impl<A> ModalSpec<A> {
    /// Buttons that carry an action, with the index used in their
    /// `data-modal-action` attribute.
    pub fn actions(&self) -> impl Iterator<Item = (usize, &A)> {
        self.buttons
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.action.as_ref().map(|a| (i, a)))
    }

    /// Inner HTML of the `div.modal.fade` element.
    pub fn render(&self) -> String {
        let mut footer = String::new();
        for (i, button) in self.buttons.iter().enumerate() {
            let action_attr = if button.action.is_some() {
                format!(" {}=\"{}\"", DATA_MODAL_ACTION, i)
            } else {
                String::new()
            };
            let _ = write!(
                footer,
                "<button type=\"button\" class=\"btn btn-{}\" data-bs-dismiss=\"modal\"{}>{}</button>",
                button.variant.as_str(),
                action_attr,
                escape_html(&button.label)
            );
        }
        format!(
            concat!(
                "<div class=\"modal-dialog\"><div class=\"modal-content\">",
                "<div class=\"modal-header\"><h5 class=\"modal-title\">{}</h5>",
                "<button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"modal\"></button></div>",
                "<div class=\"modal-body\">{}</div>",
                "<div class=\"modal-footer\">{}</div>",
                "</div></div>"
            ),
            escape_html(&self.title),
            self.body_html,
            footer
        )
    }
}

/// Inner HTML of an alert banner: the message and a dismiss button.
pub fn alert_html(message: &str) -> String {
    format!(
        "{}<button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"alert\"></button>",
        escape_html(message)
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
