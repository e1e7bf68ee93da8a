use std::time::Duration;

use crate::channel::ReconnectPolicy;
use crate::url::DEFAULT_BASE_URL;

/// Transport configuration for Bravo backend requests and session streams.
#[derive(Debug, Clone)]
pub struct BravoApiConfig {
    /// Base URL; `/chat` and `/ws/{session_id}` are derived from it.
    pub base_url: String,
    /// Optional `User-Agent` override for HTTP requests.
    pub user_agent: Option<String>,
    /// Optional timeout for the prompt-submission request.
    pub timeout: Option<Duration>,
    /// Reconnect behavior for a dropped session stream.
    pub reconnect: ReconnectPolicy,
}

impl Default for BravoApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
            timeout: None,
            reconnect: ReconnectPolicy::default(),
        }
    }
}

impl BravoApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_reconnect(mut self, reconnect: ReconnectPolicy) -> Self {
        self.reconnect = reconnect;
        self
    }
}
