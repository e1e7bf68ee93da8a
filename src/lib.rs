//! Session-scoped event pipeline for the Bravo agent chat client.
//!
//! One mounted session view owns exactly one of everything here: a
//! [`Session`] identity, an append-only [`EventStore`] of decoded agent
//! events, a [`ViewState`] reducer deriving the workspace presentation
//! (active plan, active pane, terminal buffer, processing flag), and a
//! [`SessionController`] that correlates submitted prompts with the
//! asynchronous event stream via the shared session id.
//!
//! Transport and wire decoding live in the `bravo_api` crate; everything in
//! this crate is pure state that can be exercised without a live connection.
//!
//! Lifecycle contract: all of this state is created when the session view
//! mounts and discarded when it unmounts. Nothing is persisted; no event
//! survives a reload.

pub mod controller;
pub mod event;
pub mod session;
pub mod state;
pub mod store;

pub use controller::{SessionController, SubmitError};
pub use event::{AgentEvent, AgentEventKind, EventId, PlanStep, StepStatus};
pub use session::{Session, SessionId};
pub use state::{BrowserState, EditorState, ViewState, WorkspaceView, TERMINAL_PLACEHOLDER};
pub use store::EventStore;
