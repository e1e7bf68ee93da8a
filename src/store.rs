use crate::event::AgentEvent;

/// Ordered, append-only log of decoded events for the active session.
///
/// The store is the source of truth for rendering the conversation. Events
/// are never mutated, reordered, or removed once appended; a corrected plan
/// arrives as a new `Plan` event, not a patch. Content duplicates are legal
/// by design — uniqueness holds only for ids, by construction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<AgentEvent>,
}

impl EventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, event: AgentEvent) {
        self.events.push(event);
    }

    /// Reset for a new task. Only an explicit user action invokes this;
    /// no inbound event clears the log implicitly.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Ordered view of all stored events; re-reading does not consume.
    #[must_use]
    pub fn events(&self) -> &[AgentEvent] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&AgentEvent> {
        self.events.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
