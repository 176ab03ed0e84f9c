//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::error_input::ErrorInput;
use crate::message::RequestId;
use stackexplain_core::{ExplainRequest, ExplanationRecord, ModelChoice};

/// Overall lifecycle of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Form control that receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    #[default]
    ErrorInput,
    ModelSelector,
    /// Only reachable while the current record has links
    Links,
}

/// Whether a backend request is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    /// Waiting for the settlement of request `id` (the newest one issued)
    Pending { id: RequestId },
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Error message being edited
    pub input: ErrorInput,

    /// Model sent with the next submission
    pub selected_model: ModelChoice,

    /// Most recently applied explanation; `None` before the first settlement
    pub last_response: Option<ExplanationRecord>,

    /// Dark palette active
    pub dark_mode: bool,

    pub focus: FocusField,

    pub request: RequestPhase,

    /// Highlighted entry in the links list
    pub selected_link: usize,

    /// Vertical scroll offset of the results panel, in rows
    pub result_scroll: u16,

    /// When `last_response` was applied
    pub last_settled_at: Option<DateTime<Local>>,

    /// Animation frame counter, advanced on every tick while pending
    pub tick_count: u64,

    pub settings: Settings,

    pub phase: AppPhase,

    /// Last issued request token
    last_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Initial state honouring the configured defaults
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            input: ErrorInput::new(),
            selected_model: settings.ui.default_model,
            last_response: None,
            dark_mode: settings.ui.dark_mode,
            focus: FocusField::default(),
            request: RequestPhase::Idle,
            selected_link: 0,
            result_scroll: 0,
            last_settled_at: None,
            tick_count: 0,
            settings,
            phase: AppPhase::Running,
            last_request_id: 0,
        }
    }

    pub fn error_text(&self) -> &str {
        self.input.text()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.request, RequestPhase::Pending { .. })
    }

    /// True if `id` is the request the form is waiting on
    pub fn awaits(&self, id: RequestId) -> bool {
        self.request == RequestPhase::Pending { id }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Payload for the next submission.
    ///
    /// The model is included unless `backend.send_model` is off.
    pub fn build_request(&self) -> ExplainRequest {
        let request = ExplainRequest::new(self.input.text());
        if self.settings.backend.send_model {
            request.with_model(self.selected_model.id())
        } else {
            request
        }
    }

    /// Issue a new request token and mark it pending.
    ///
    /// Any request still in flight is superseded; its settlement will be
    /// discarded by [`AppState::apply_settlement`].
    pub fn issue_request(&mut self) -> RequestId {
        self.last_request_id += 1;
        let id = RequestId(self.last_request_id);
        self.request = RequestPhase::Pending { id };
        id
    }

    /// Most recently issued token, if any
    pub fn latest_request_id(&self) -> Option<RequestId> {
        (self.last_request_id > 0).then_some(RequestId(self.last_request_id))
    }

    /// Replace the response state with `record` if `id` is the pending
    /// request. Returns `false` for superseded settlements.
    pub fn apply_settlement(&mut self, id: RequestId, record: ExplanationRecord) -> bool {
        if !self.awaits(id) {
            return false;
        }

        self.last_response = Some(record);
        self.last_settled_at = Some(Local::now());
        self.request = RequestPhase::Idle;
        self.selected_link = 0;
        self.result_scroll = 0;
        if self.focus == FocusField::Links && self.link_count() == 0 {
            self.focus = FocusField::ErrorInput;
        }
        true
    }

    /// Number of links in the current record
    pub fn link_count(&self) -> usize {
        self.last_response
            .as_ref()
            .map_or(0, ExplanationRecord::link_count)
    }

    /// URL of the highlighted link
    pub fn selected_link_url(&self) -> Option<&str> {
        self.last_response
            .as_ref()
            .and_then(|record| record.link(self.selected_link))
    }

    pub fn select_next_link(&mut self) {
        let count = self.link_count();
        if count > 0 {
            self.selected_link = (self.selected_link + 1) % count;
        }
    }

    pub fn select_previous_link(&mut self) {
        let count = self.link_count();
        if count > 0 {
            self.selected_link = (self.selected_link + count - 1) % count;
        }
    }

    fn focus_order(&self) -> Vec<FocusField> {
        let mut order = vec![FocusField::ErrorInput, FocusField::ModelSelector];
        if self.link_count() > 0 {
            order.push(FocusField::Links);
        }
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + 1) % order.len()];
    }

    pub fn focus_previous(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + order.len() - 1) % order.len()];
    }
}
