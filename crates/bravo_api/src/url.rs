/// Default base URL for a locally running Bravo backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

fn normalized_base(input: &str) -> &str {
    let base = input.trim();
    let base = if base.is_empty() { DEFAULT_BASE_URL } else { base };
    base.trim_end_matches('/')
}

/// Prompt submission endpoint derived from a base URL.
pub fn chat_url(base_url: &str) -> String {
    format!("{}/chat", normalized_base(base_url))
}

/// Session-scoped streaming endpoint derived from a base URL.
///
/// HTTP schemes map to their WebSocket counterparts (`http` → `ws`,
/// `https` → `wss`); explicit `ws`/`wss` bases pass through unchanged.
pub fn websocket_url(base_url: &str, session_id: &str) -> String {
    let base = normalized_base(base_url);
    let ws_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else if base.starts_with("ws://") || base.starts_with("wss://") {
        base.to_string()
    } else {
        format!("ws://{base}")
    };

    format!("{ws_base}/ws/{session_id}")
}
