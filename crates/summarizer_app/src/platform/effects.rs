use std::sync::{mpsc, Arc};

use engine_logging::engine_info;
use summarizer_core::{Effect, Msg};
use summarizer_engine::{BackendConfig, EngineEvent, EngineHandle, EventSink};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: BackendConfig, msg_tx: mpsc::Sender<Msg>) -> std::io::Result<Self> {
        let engine = EngineHandle::new(config, Arc::new(MsgSink { msg_tx }))?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ResolveBackend => {
                    engine_info!("Resolving backend");
                    self.engine.resolve_backend();
                }
                Effect::RequestSummary {
                    request_id,
                    backend,
                    url,
                } => {
                    engine_info!(
                        "RequestSummary request_id={} backend={} url={}",
                        request_id,
                        backend,
                        url
                    );
                    self.engine.summarize(request_id, backend, url);
                }
            }
        }
    }
}

/// Feeds engine events back into the UI loop as messages.
struct MsgSink {
    msg_tx: mpsc::Sender<Msg>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.msg_tx.send(map_event(event));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::BackendResolved { address } => Msg::BackendResolved { address },
        EngineEvent::SummaryCompleted { request_id, result } => Msg::SummaryDone {
            request_id,
            result: result.map_err(|err| err.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summarizer_engine::SummaryError;

    #[test]
    fn failures_become_display_text() {
        let msg = map_event(EngineEvent::SummaryCompleted {
            request_id: 3,
            result: Err(SummaryError::UnparseableErrorBody { status: 500 }),
        });

        assert_eq!(
            msg,
            Msg::SummaryDone {
                request_id: 3,
                result: Err("Failed to parse error response".to_string()),
            }
        );
    }

    #[test]
    fn resolution_passes_address_through() {
        let msg = map_event(EngineEvent::BackendResolved {
            address: Some("http://localhost:8003".to_string()),
        });

        assert_eq!(
            msg,
            Msg::BackendResolved {
                address: Some("http://localhost:8003".to_string())
            }
        );
    }
}
