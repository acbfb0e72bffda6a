use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_debug, engine_warn};
use tokio::sync::mpsc as async_mpsc;

use crate::resolver::resolve_backend;
use crate::{
    BackendConfig, EngineEvent, Prober, ReqwestProber, ReqwestSummaryClient, RequestId,
    SummaryClient,
};

/// Receives engine events on whatever thread the engine runs on.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Resolve,
    Summarize {
        request_id: RequestId,
        backend: String,
        url: String,
    },
}

struct Services {
    config: BackendConfig,
    prober: Arc<dyn Prober>,
    client: Arc<dyn SummaryClient>,
    sink: Arc<dyn EventSink>,
}

/// Runs network work on a dedicated single-threaded Tokio runtime.
///
/// Dropping the handle stops the worker once queued commands finish.
pub struct EngineHandle {
    cmd_tx: async_mpsc::UnboundedSender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(config: BackendConfig, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let prober = Arc::new(ReqwestProber::new(config.http.clone()));
        let client = Arc::new(ReqwestSummaryClient::new(config.http.clone()));
        Self::with_services(config, prober, client, sink)
    }

    pub fn with_services(
        config: BackendConfig,
        prober: Arc<dyn Prober>,
        client: Arc<dyn SummaryClient>,
        sink: Arc<dyn EventSink>,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let (cmd_tx, mut cmd_rx) = async_mpsc::unbounded_channel();
        let services = Arc::new(Services {
            config,
            prober,
            client,
            sink,
        });

        thread::Builder::new()
            .name("summarizer-engine".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    let mut tasks = tokio::task::JoinSet::new();
                    while let Some(command) = cmd_rx.recv().await {
                        while tasks.try_join_next().is_some() {}
                        let services = services.clone();
                        tasks.spawn(async move {
                            handle_command(&services, command).await;
                        });
                    }
                    while tasks.join_next().await.is_some() {}
                    engine_debug!("Engine worker stopped");
                });
            })?;

        Ok(Self { cmd_tx })
    }

    /// Starts backend resolution; the answer arrives as [`EngineEvent::BackendResolved`].
    pub fn resolve_backend(&self) {
        self.send(EngineCommand::Resolve);
    }

    pub fn summarize(
        &self,
        request_id: RequestId,
        backend: impl Into<String>,
        url: impl Into<String>,
    ) {
        self.send(EngineCommand::Summarize {
            request_id,
            backend: backend.into(),
            url: url.into(),
        });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            engine_warn!("Engine worker is gone; command dropped");
        }
    }
}

async fn handle_command(services: &Services, command: EngineCommand) {
    match command {
        EngineCommand::Resolve => {
            let address = resolve_backend(services.prober.as_ref(), &services.config).await;
            services.sink.emit(EngineEvent::BackendResolved { address });
        }
        EngineCommand::Summarize {
            request_id,
            backend,
            url,
        } => {
            engine_debug!("Request {} to {} url_len={}", request_id, backend, url.len());
            let result = services.client.summarize(&backend, &url).await;
            if let Err(err) = &result {
                engine_warn!("Request {} failed: {:?}", request_id, err);
            }
            services
                .sink
                .emit(EngineEvent::SummaryCompleted { request_id, result });
        }
    }
}
