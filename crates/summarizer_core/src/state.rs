use crate::view_model::{AppViewModel, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE};

pub type RequestId = u64;

/// Where the form is with respect to its current submission.
///
/// Summary and error text live inside the variants, so the form can never
/// show both at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    InFlight {
        request_id: RequestId,
    },
    Succeeded {
        summary: String,
    },
    Failed {
        message: String,
    },
}

impl SubmissionPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionPhase::InFlight { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct BackendState {
    current: String,
    resolution_started: bool,
    resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input_url: String,
    backend: BackendState,
    phase: SubmissionPhase,
    next_request_id: RequestId,
    exit_requested: bool,
    last_rejected_submit: bool,
    dirty: bool,
}

impl AppState {
    /// Creates a state whose backend starts at the configured default address.
    pub fn new(default_backend: impl Into<String>) -> Self {
        Self {
            backend: BackendState {
                current: default_backend.into(),
                ..BackendState::default()
            },
            next_request_id: 1,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let in_flight = self.phase.is_in_flight();
        let (summary_paragraphs, error) = match &self.phase {
            SubmissionPhase::Succeeded { summary } => {
                (summary.split('\n').map(ToOwned::to_owned).collect(), None)
            }
            SubmissionPhase::Failed { message } => (Vec::new(), Some(message.clone())),
            SubmissionPhase::Idle | SubmissionPhase::InFlight { .. } => (Vec::new(), None),
        };
        AppViewModel {
            input_url: self.input_url.clone(),
            backend_url: self.backend.current.clone(),
            backend_resolved: self.backend.resolved,
            phase: self.phase.clone(),
            submit_enabled: !in_flight,
            submit_label: if in_flight {
                SUBMIT_LABEL_BUSY
            } else {
                SUBMIT_LABEL_IDLE
            },
            summary_paragraphs,
            error,
            submit_rejected: self.last_rejected_submit,
            should_exit: self.exit_requested && !in_flight,
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn backend_url(&self) -> &str {
        &self.backend.current
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input_url != text {
            self.input_url = text;
            self.mark_dirty();
        }
    }

    /// Marks resolution as started. Returns false if it already ran.
    pub(crate) fn begin_resolution(&mut self) -> bool {
        if self.backend.resolution_started {
            return false;
        }
        self.backend.resolution_started = true;
        true
    }

    /// Adopts the resolver's answer. Only the first answer counts.
    pub(crate) fn apply_resolution(&mut self, address: Option<String>) {
        if self.backend.resolved {
            return;
        }
        self.backend.resolved = true;
        if let Some(address) = address {
            self.backend.current = address;
        }
        self.mark_dirty();
    }

    /// Moves to `InFlight` and returns the request to send, or `None` while busy.
    pub(crate) fn begin_submission(&mut self) -> Option<(RequestId, String, String)> {
        if self.phase.is_in_flight() {
            if !self.last_rejected_submit {
                self.last_rejected_submit = true;
                self.mark_dirty();
            }
            return None;
        }
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.phase = SubmissionPhase::InFlight { request_id };
        self.last_rejected_submit = false;
        self.mark_dirty();
        Some((
            request_id,
            self.backend.current.clone(),
            self.input_url.clone(),
        ))
    }

    pub(crate) fn complete_submission(
        &mut self,
        request_id: RequestId,
        result: Result<String, String>,
    ) {
        match self.phase {
            SubmissionPhase::InFlight { request_id: current } if current == request_id => {}
            _ => return,
        }
        self.phase = match result {
            Ok(summary) => SubmissionPhase::Succeeded { summary },
            Err(message) => SubmissionPhase::Failed { message },
        };
        self.last_rejected_submit = false;
        self.mark_dirty();
    }

    pub(crate) fn request_exit(&mut self) {
        if !self.exit_requested {
            self.exit_requested = true;
            self.mark_dirty();
        }
    }
}
