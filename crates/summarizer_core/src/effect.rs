#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Probe the primary backend, then the local fallbacks, once per session.
    ResolveBackend,
    /// Send the URL to the backend for summarization.
    RequestSummary {
        request_id: crate::RequestId,
        backend: String,
        url: String,
    },
}
