#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application finished starting; kicks off backend resolution.
    Started,
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the form.
    SubmitClicked,
    /// Resolver finished. `None` means no candidate answered.
    BackendResolved { address: Option<String> },
    /// Engine completion for a submission; the error is already user-facing text.
    SummaryDone {
        request_id: crate::RequestId,
        result: Result<String, String>,
    },
    /// The input source is gone; exit once nothing is in flight.
    InputClosed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
