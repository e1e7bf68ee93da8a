use std::fmt;

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

/// Opaque identifier for one agent conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh identifier, unique with overwhelming probability.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One continuous conversation between the user and the agent.
///
/// Created once per mounted session view and immutable for its lifetime; a
/// new conversation constructs a new `Session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    created_at: OffsetDateTime,
}

impl Session {
    #[must_use]
    pub fn start() -> Self {
        Self {
            id: SessionId::generate(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// RFC 3339 rendition of the session start time.
    pub fn created_at_rfc3339(&self) -> Result<String, time::error::Format> {
        self.created_at.format(&Rfc3339)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::start()
    }
}
