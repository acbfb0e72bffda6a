use crate::SubmissionPhase;

pub const SUBMIT_LABEL_IDLE: &str = "Summarize Video";
pub const SUBMIT_LABEL_BUSY: &str = "Summarizing...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input_url: String,
    pub backend_url: String,
    /// True once the resolver has reported, whatever it found.
    pub backend_resolved: bool,
    pub phase: SubmissionPhase,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    /// Summary split on newlines; empty unless the last submission succeeded.
    pub summary_paragraphs: Vec<String>,
    pub error: Option<String>,
    /// The last submit arrived while another was in flight and was dropped.
    pub submit_rejected: bool,
    pub should_exit: bool,
    pub dirty: bool,
}
