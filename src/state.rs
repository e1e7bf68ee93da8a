use crate::event::{AgentEvent, AgentEventKind, PlanStep};

/// Which workspace pane the session view is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkspaceView {
    #[default]
    Terminal,
    Browser,
    Editor,
}

/// Latest browser snapshot pushed by the agent. Replace-in-place; exactly
/// one value is held at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    pub url: String,
    pub screenshot_base64: String,
}

/// Latest code editor snapshot pushed by the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub language: String,
    pub content: String,
}

/// Shown in the terminal pane until the first real output arrives.
pub const TERMINAL_PLACEHOLDER: &str = "Waiting for agent output...";

const TERMINAL_SEPARATOR: &str = "\n\n";

/// Derived view state for one mounted session.
///
/// A reducer over appended events, workspace snapshots, and control signals.
/// It owns no I/O, so every transition is testable without a live transport.
///
/// The processing flag is a two-state machine: `idle -> processing` on prompt
/// submission only; `processing -> idle` on `task_complete` or submission
/// failure only. No inbound event type participates beyond those triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active_plan: Vec<PlanStep>,
    active_view: WorkspaceView,
    is_processing: bool,
    terminal_buffer: String,
    has_terminal_output: bool,
    browser: Option<BrowserState>,
    editor: Option<EditorState>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_plan: Vec::new(),
            active_view: WorkspaceView::default(),
            is_processing: false,
            terminal_buffer: TERMINAL_PLACEHOLDER.to_string(),
            has_terminal_output: false,
            browser: None,
            editor: None,
        }
    }

    /// Steps of the most recently appended `Plan` event; empty before the
    /// first.
    #[must_use]
    pub fn active_plan(&self) -> &[PlanStep] {
        &self.active_plan
    }

    #[must_use]
    pub fn active_view(&self) -> WorkspaceView {
        self.active_view
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    #[must_use]
    pub fn terminal_buffer(&self) -> &str {
        &self.terminal_buffer
    }

    #[must_use]
    pub fn browser(&self) -> Option<&BrowserState> {
        self.browser.as_ref()
    }

    #[must_use]
    pub fn editor(&self) -> Option<&EditorState> {
        self.editor.as_ref()
    }

    /// Manual pane selection. Holds until the next browser or editor
    /// snapshot arrives; snapshots are last-writer-wins over it.
    pub fn select_view(&mut self, view: WorkspaceView) {
        self.active_view = view;
    }

    /// Track derived plan state for a newly appended event.
    pub fn on_event_appended(&mut self, event: &AgentEvent) {
        if let AgentEventKind::Plan { steps } = event.kind() {
            // Each plan replaces the prior one wholesale, never a merge.
            self.active_plan = steps.clone();
        }
    }

    /// Concatenate one terminal snapshot onto the running buffer and force
    /// the terminal pane to the front. The first real output discards the
    /// placeholder; later outputs are separated by a blank line.
    pub fn on_terminal_output(&mut self, content: &str) {
        if self.has_terminal_output {
            self.terminal_buffer.push_str(TERMINAL_SEPARATOR);
            self.terminal_buffer.push_str(content);
        } else {
            self.terminal_buffer = content.to_owned();
            self.has_terminal_output = true;
        }
        self.active_view = WorkspaceView::Terminal;
    }

    /// Replace the browser snapshot and force the browser pane to the front.
    pub fn on_browser_view(&mut self, url: String, screenshot_base64: String) {
        self.browser = Some(BrowserState {
            url,
            screenshot_base64,
        });
        self.active_view = WorkspaceView::Browser;
    }

    /// Replace the editor snapshot and force the editor pane to the front.
    pub fn on_code_editor(&mut self, language: String, content: String) {
        self.editor = Some(EditorState { language, content });
        self.active_view = WorkspaceView::Editor;
    }

    /// `idle -> processing`; the only entry into the processing state.
    pub fn on_prompt_submitted(&mut self) {
        self.is_processing = true;
    }

    /// `processing -> idle` on the backend's terminal signal.
    pub fn on_task_complete(&mut self) {
        self.is_processing = false;
    }

    /// `processing -> idle` when the submission request itself failed.
    pub fn on_submission_failed(&mut self) {
        self.is_processing = false;
    }

    /// Reset derived state for a new task; keeps nothing from the prior one.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
