use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.begin_resolution() {
                vec![Effect::ResolveBackend]
            } else {
                Vec::new()
            }
        }
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => match state.begin_submission() {
            Some((request_id, backend, url)) => vec![Effect::RequestSummary {
                request_id,
                backend,
                url,
            }],
            None => Vec::new(),
        },
        Msg::BackendResolved { address } => {
            state.apply_resolution(address);
            Vec::new()
        }
        Msg::SummaryDone { request_id, result } => {
            state.complete_submission(request_id, result);
            Vec::new()
        }
        Msg::InputClosed => {
            state.request_exit();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
