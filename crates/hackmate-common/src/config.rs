use serde::{Deserialize, Serialize};

/// Runtime settings for the page client.
///
/// Pages may override any field with a JSON `<script>` block; missing fields
/// keep their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every API path. Empty means same-origin relative URLs.
    pub api_base: String,
    pub poll_interval_ms: u64,
    pub debounce_ms: u64,
    pub alert_dismiss_ms: u64,
    pub reload_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            poll_interval_ms: 30_000,
            debounce_ms: 300,
            alert_dismiss_ms: 5_000,
            reload_delay_ms: 1_500,
        }
    }
}

impl ClientConfig {
    /// Parse an override block, falling back to defaults on malformed JSON.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed client config: {}", e);
                Self::default()
            }
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}
