use bravo_api::frames::SessionFrame;
use bravo_api::{BravoApiClient, BravoApiError, SessionChannel};
use thiserror::Error;
use tracing::{debug, info};

use crate::event::AgentEvent;
use crate::session::Session;
use crate::state::{ViewState, WorkspaceView};
use crate::store::EventStore;

/// Why a prompt submission was rejected or failed.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("prompt is empty")]
    EmptyPrompt,

    /// A prior prompt is still being processed; input is gated, not queued.
    #[error("a task is already processing")]
    AlreadyProcessing,

    #[error("prompt submission failed: {0}")]
    Request(#[from] BravoApiError),
}

/// Owns one session's event log and derived view state, and correlates
/// submitted prompts with the asynchronous event stream.
///
/// The only correlation between a prompt and its reply is the shared session
/// id: the submission request is fire-and-forget with respect to content,
/// and the agent's events arrive later through the session channel.
pub struct SessionController {
    session: Session,
    client: BravoApiClient,
    store: EventStore,
    state: ViewState,
}

impl SessionController {
    pub fn new(session: Session, client: BravoApiClient) -> Self {
        Self {
            session,
            client,
            store: EventStore::new(),
            state: ViewState::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn select_view(&mut self, view: WorkspaceView) {
        self.state.select_view(view);
    }

    /// Validate and submit one prompt.
    ///
    /// The user message is appended and the processing flag raised before
    /// the request suspends (local-first echo). A failed request injects a
    /// Summary-shaped error event and clears the flag; the echoed message is
    /// deliberately left in place next to the error.
    pub async fn submit_prompt(&mut self, text: &str) -> Result<(), SubmitError> {
        let prompt = text.trim();
        if prompt.is_empty() {
            return Err(SubmitError::EmptyPrompt);
        }
        if self.state.is_processing() {
            return Err(SubmitError::AlreadyProcessing);
        }

        self.append_event(AgentEvent::user_message(prompt));
        self.state.on_prompt_submitted();

        match self.client.submit_prompt(self.session.id().as_str(), prompt).await {
            Ok(()) => Ok(()),
            Err(error) => {
                self.append_event(AgentEvent::error_summary(&error.to_string()));
                self.state.on_submission_failed();
                Err(SubmitError::Request(error))
            }
        }
    }

    /// Apply one decoded frame.
    ///
    /// Frames must be applied strictly in arrival order; plan, thought, and
    /// action sequencing is meaningful to the user narrative.
    pub fn handle_frame(&mut self, frame: SessionFrame) {
        match frame {
            SessionFrame::Thought { content } => self.append_event(AgentEvent::thought(content)),
            SessionFrame::Plan { steps } => self.append_event(AgentEvent::plan(steps)),
            SessionFrame::Action { title, content } => {
                self.append_event(AgentEvent::action(title, content));
            }
            SessionFrame::Summary { content } => self.append_event(AgentEvent::summary(content)),
            SessionFrame::UserEcho { .. } => {
                // Already appended locally at submission time.
                debug!("dropping server echo of user message");
            }
            SessionFrame::AgentError { content } => {
                self.append_event(AgentEvent::error_summary(&content));
            }
            SessionFrame::TerminalOutput { content } => self.state.on_terminal_output(&content),
            SessionFrame::BrowserView {
                url,
                screenshot_base64,
            } => self.state.on_browser_view(url, screenshot_base64),
            SessionFrame::CodeEditor { language, content } => {
                self.state.on_code_editor(language, content);
            }
            SessionFrame::TaskComplete => self.state.on_task_complete(),
        }
    }

    /// Drain the session stream to completion, applying frames in arrival
    /// order with no batching or reordering.
    pub async fn run(&mut self, channel: &mut SessionChannel) {
        while let Some(frame) = channel.next_frame().await {
            self.handle_frame(frame);
        }
        info!(session_id = %self.session.id(), "session stream finished");
    }

    /// Start a new task: drop the log and derived state, keep the session
    /// identity.
    pub fn clear_conversation(&mut self) {
        self.store.clear();
        self.state.reset();
    }

    fn append_event(&mut self, event: AgentEvent) {
        self.state.on_event_appended(&event);
        self.store.append(event);
    }
}
