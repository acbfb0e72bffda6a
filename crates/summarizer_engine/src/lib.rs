//! Summarizer engine: backend discovery and summarization requests.
mod client;
mod config;
mod engine;
mod probe;
mod resolver;
mod types;

pub use client::{endpoint_url, ReqwestSummaryClient, SummaryClient};
pub use config::{BackendConfig, ConfigError, HttpSettings, API_URL_ENV, REQUEST_TIMEOUT_ENV};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use probe::{ProbeFailure, Prober, ReqwestProber, PROBE_SENTINEL};
pub use resolver::{fallback_candidates, find_first_reachable, resolve_backend};
pub use types::{EngineEvent, RequestId, SummaryError};
