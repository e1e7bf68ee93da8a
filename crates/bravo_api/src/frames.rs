use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Status of one plan step as reported by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl StepStatus {
    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "pending" => Self::Pending,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

/// One unit of the agent's stated multi-step intention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStep {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub status: StepStatus,
}

/// Decoded inbound frame from the session stream, after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionFrame {
    Thought { content: String },
    /// Carries the full step list; each plan replaces the prior one wholesale.
    Plan { steps: Vec<PlanStep> },
    Action { title: String, content: String },
    Summary { content: String },
    /// Server echo of a submitted prompt. The client appends the user message
    /// locally at submission time, so the echo carries no new information.
    UserEcho { content: String },
    /// Backend-reported agent failure, surfaced in the conversation.
    AgentError { content: String },
    TerminalOutput { content: String },
    BrowserView { url: String, screenshot_base64: String },
    CodeEditor { language: String, content: String },
    TaskComplete,
}

/// Decode one raw text frame into a typed session frame.
///
/// Malformed payloads and unrecognized `type` values are dropped (logged,
/// never fatal): protocol robustness must not disrupt the conversation.
pub fn decode_frame(raw: &str) -> Option<SessionFrame> {
    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(error) => {
            warn!(%error, "dropping malformed session frame");
            return None;
        }
    };

    map_frame(&value)
}

fn map_frame(value: &Value) -> Option<SessionFrame> {
    let Some(frame_type) = value.get("type").and_then(Value::as_str) else {
        warn!("dropping session frame without a type field");
        return None;
    };

    match frame_type {
        "thought" => Some(SessionFrame::Thought {
            content: string_field(value, "content"),
        }),
        "plan" => Some(SessionFrame::Plan {
            steps: plan_steps(value),
        }),
        "action" => Some(SessionFrame::Action {
            title: string_field(value, "title"),
            content: string_field(value, "content"),
        }),
        // `agent_response` is the final-answer frame; both normalize to the
        // same summary treatment.
        "summary" | "agent_response" => Some(SessionFrame::Summary {
            content: string_field(value, "content"),
        }),
        "user_message" => Some(SessionFrame::UserEcho {
            content: string_field(value, "content"),
        }),
        "error" => Some(SessionFrame::AgentError {
            content: string_field(value, "content"),
        }),
        "terminal_output" => Some(SessionFrame::TerminalOutput {
            content: string_field(value, "content"),
        }),
        // The backend packs the screenshot into `content`; `screenshot` is
        // accepted as an alternate key.
        "browser_view" => Some(SessionFrame::BrowserView {
            url: string_field(value, "url"),
            screenshot_base64: first_string_field(value, &["content", "screenshot"]),
        }),
        "code_editor" => Some(SessionFrame::CodeEditor {
            language: string_field(value, "language"),
            content: string_field(value, "content"),
        }),
        "task_complete" => Some(SessionFrame::TaskComplete),
        other => {
            debug!(frame_type = other, "ignoring unrecognized session frame type");
            None
        }
    }
}

fn string_field(value: &Value, field: &str) -> String {
    value
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

fn first_string_field(value: &Value, fields: &[&str]) -> String {
    fields
        .iter()
        .find_map(|field| value.get(*field).and_then(Value::as_str))
        .unwrap_or_default()
        .to_owned()
}

fn plan_steps(value: &Value) -> Vec<PlanStep> {
    // Step lists arrive under `steps`, with `content` as an alternate key.
    let Some(steps) = value
        .get("steps")
        .or_else(|| value.get("content"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    steps
        .iter()
        .map(|step| PlanStep {
            id: string_field(step, "id"),
            text: string_field(step, "text"),
            status: step
                .get("status")
                .and_then(Value::as_str)
                .and_then(StepStatus::parse)
                .unwrap_or_default(),
        })
        .collect()
}
