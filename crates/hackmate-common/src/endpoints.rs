use std::fmt;

/// HTTP method of an endpoint. Only the two the REST API needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every server interaction the page client performs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    UnreadCount,
    CurrentUser,
    CreateTeam,
    JoinTeam { team_id: String },
    RegisterEvent { event_id: String },
    SendMessage,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::UnreadCount | Endpoint::CurrentUser => Method::Get,
            _ => Method::Post,
        }
    }

    /// Path relative to the configured API base.
    pub fn path(&self) -> String {
        match self {
            Endpoint::UnreadCount => "/api/notifications/unread_count/".to_string(),
            Endpoint::CurrentUser => "/api/users/me/".to_string(),
            Endpoint::CreateTeam => "/api/teams/".to_string(),
            Endpoint::JoinTeam { team_id } => format!("/api/teams/{}/join/", team_id),
            Endpoint::RegisterEvent { event_id } => format!("/api/events/{}/register/", event_id),
            Endpoint::SendMessage => "/api/messages/".to_string(),
        }
    }

    /// Mutating requests carry the JSON content type and the CSRF header.
    pub fn is_mutating(&self) -> bool {
        self.method() == Method::Post
    }

    /// Operation name used in failure logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Endpoint::UnreadCount => "checking notifications",
            Endpoint::CurrentUser => "fetching current user",
            Endpoint::CreateTeam => "creating team",
            Endpoint::JoinTeam { .. } => "joining team",
            Endpoint::RegisterEvent { .. } => "registering for event",
            Endpoint::SendMessage => "sending message",
        }
    }
}
