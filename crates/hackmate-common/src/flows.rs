//! Confirmed join/register actions: loading indicator, request, feedback.

use crate::api::Api;
use crate::dispatch::ConfirmAction;
use crate::markup::{AlertLevel, ModalSpec};

/// Presentation seam implemented by the DOM layer.
pub trait View {
    fn show_alert(&self, message: &str, level: AlertLevel);

    fn show_modal(&self, spec: ModalSpec<ConfirmAction>);

    /// Mark the page busy or idle. Cosmetic only.
    fn set_loading(&self, busy: bool);

    /// Reload the page after `delay_ms`.
    fn schedule_reload(&self, delay_ms: u64);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The server answered with a truthy `message`; shown as success, reload scheduled.
    Succeeded(String),
    /// The server answered without a truthy `message`; nothing is shown.
    Silent,
    /// The request failed; an error alert is shown.
    Failed,
}

/// Run a confirmed action end to end.
///
/// `join_message` is only sent for team joins.
pub async fn run_confirmed<A, V>(
    api: &A,
    view: &V,
    action: &ConfirmAction,
    join_message: &str,
    reload_delay_ms: u64,
) -> FlowOutcome
where
    A: Api,
    V: View,
{
    view.set_loading(true);
    let result = match action {
        ConfirmAction::JoinTeam { team_id, .. } => api.join_team(team_id, join_message).await,
        ConfirmAction::RegisterEvent { event_id, .. } => api.register_for_event(event_id).await,
    };
    view.set_loading(false);

    match result {
        Ok(response) => match response.message() {
            Some(message) => {
                view.show_alert(&message, AlertLevel::Success);
                view.schedule_reload(reload_delay_ms);
                FlowOutcome::Succeeded(message)
            }
            None => {
                if let Some(error) = response.error() {
                    tracing::warn!("{:?} answered without a message: {}", action, error);
                }
                FlowOutcome::Silent
            }
        },
        Err(_) => {
            view.show_alert(action.failure_text(), AlertLevel::Danger);
            FlowOutcome::Failed
        }
    }
}
