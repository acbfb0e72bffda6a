use thiserror::Error;

pub type RequestId = u64;

/// Why a summarization request failed.
///
/// `Display` is the text shown to the user; details stay in the variant for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("An error occurred while fetching the summary")]
    Transport { detail: String },
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Failed to parse error response")]
    UnparseableErrorBody { status: u16 },
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("Failed to parse summary response")]
    MalformedSummary { detail: String },
    #[error("The server returned an empty summary")]
    EmptySummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// `None` when neither the primary nor any fallback answered.
    BackendResolved { address: Option<String> },
    SummaryCompleted {
        request_id: RequestId,
        result: Result<String, SummaryError>,
    },
}
