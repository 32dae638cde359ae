use crate::api::Api;

/// How the notification badge should change after a check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BadgeUpdate {
    /// Set the text and show the badge inline.
    Show(String),
    Hide,
}

impl BadgeUpdate {
    pub fn from_unread(count: i64) -> Self {
        if count > 0 {
            BadgeUpdate::Show(count.to_string())
        } else {
            BadgeUpdate::Hide
        }
    }

    pub fn display_value(&self) -> &'static str {
        match self {
            BadgeUpdate::Show(_) => "inline",
            BadgeUpdate::Hide => "none",
        }
    }
}

/// Fetch the unread count once.
///
/// `None` means the request failed and the badge keeps its previous state;
/// the next poll simply tries again.
pub async fn check_unread<A: Api>(api: &A) -> Option<BadgeUpdate> {
    match api.unread_count().await {
        Ok(body) => Some(BadgeUpdate::from_unread(body.unread_count)),
        Err(e) => {
            tracing::debug!("Error checking notifications: {}", e);
            None
        }
    }
}
