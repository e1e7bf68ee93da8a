use serde::{Deserialize, Serialize};

/// Request body for the `/chat` prompt submission endpoint.
///
/// The prompt and the resulting event stream are correlated only by the
/// shared `session_id`; no other token ties them together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    pub session_id: String,
}

impl ChatRequest {
    pub fn new(prompt: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            session_id: session_id.into(),
        }
    }
}
