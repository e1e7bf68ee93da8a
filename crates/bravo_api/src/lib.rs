//! Transport-only client primitives for the Bravo agent backend.
//!
//! This crate owns the wire-facing half of the session pipeline: endpoint
//! derivation, inbound frame decoding, the per-session WebSocket channel, and
//! the prompt-submission HTTP call. It intentionally contains no event log,
//! derived view state, or UI coupling; those live in `agent_session`.
//!
//! Wire contract: the backend streams JSON frames shaped
//! `{ "type": string, content?, title?, url?, language?, steps? }` over
//! `ws(s)://…/ws/{session_id}` and accepts prompts as
//! `POST {base}/chat` with `{ "prompt": string, "session_id": string }`.
//! Unrecognized frame types are dropped, never fatal, so the client survives
//! forward-incompatible backend changes.

pub mod channel;
pub mod client;
pub mod config;
pub mod error;
pub mod frames;
pub mod payload;
pub mod url;

pub use channel::{ChannelState, ReconnectPolicy, SessionChannel};
pub use client::BravoApiClient;
pub use config::BravoApiConfig;
pub use error::BravoApiError;
pub use frames::{decode_frame, PlanStep, SessionFrame, StepStatus};
pub use payload::ChatRequest;
pub use url::{chat_url, websocket_url, DEFAULT_BASE_URL};
