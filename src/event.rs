use std::fmt;

use uuid::Uuid;

pub use bravo_api::frames::{PlanStep, StepStatus};

/// Unique identifier minted for every stored event at decode time.
///
/// The wire format guarantees neither unique nor sortable ids, so arrival
/// order is authoritative and ids exist only to key rendered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(Uuid);

impl EventId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Conversational payload of one stored event.
///
/// Workspace snapshots (terminal, browser, editor) are deliberately not
/// represented here: they overwrite derived state instead of appending to
/// the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentEventKind {
    Plan { steps: Vec<PlanStep> },
    Thought { content: String },
    Action { title: String, content: String },
    /// Markdown body; also the shape used for surfaced errors.
    Summary { content: String },
    UserMessage { content: String },
}

/// One immutable entry in the session's event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentEvent {
    id: EventId,
    kind: AgentEventKind,
}

impl AgentEvent {
    fn new(kind: AgentEventKind) -> Self {
        Self {
            id: EventId::generate(),
            kind,
        }
    }

    #[must_use]
    pub fn plan(steps: Vec<PlanStep>) -> Self {
        Self::new(AgentEventKind::Plan { steps })
    }

    #[must_use]
    pub fn thought(content: impl Into<String>) -> Self {
        Self::new(AgentEventKind::Thought {
            content: content.into(),
        })
    }

    #[must_use]
    pub fn action(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(AgentEventKind::Action {
            title: title.into(),
            content: content.into(),
        })
    }

    #[must_use]
    pub fn summary(content: impl Into<String>) -> Self {
        Self::new(AgentEventKind::Summary {
            content: content.into(),
        })
    }

    #[must_use]
    pub fn user_message(content: impl Into<String>) -> Self {
        Self::new(AgentEventKind::UserMessage {
            content: content.into(),
        })
    }

    /// Summary-shaped synthetic error injected into the conversation for
    /// submission failures and backend-reported agent errors.
    #[must_use]
    pub fn error_summary(message: &str) -> Self {
        Self::summary(format!("**Error:** {message}"))
    }

    #[must_use]
    pub fn id(&self) -> EventId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> &AgentEventKind {
        &self.kind
    }
}
