use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use crate::client::{build_client, endpoint_url, SummaryRequest};
use crate::HttpSettings;

/// Stand-in for a real video URL in probe requests.
pub const PROBE_SENTINEL: &str = "test";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    #[error("unreachable: {0}")]
    Unreachable(String),
    #[error("http status {0}")]
    Status(u16),
}

/// Checks whether a backend candidate answers.
#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, backend: &str) -> Result<(), ProbeFailure>;
}

#[derive(Debug, Clone)]
pub struct ReqwestProber {
    settings: HttpSettings,
}

impl ReqwestProber {
    pub fn new(settings: HttpSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl Prober for ReqwestProber {
    async fn probe(&self, backend: &str) -> Result<(), ProbeFailure> {
        let client = build_client(&self.settings).map_err(unreachable)?;
        let body = SummaryRequest {
            url: PROBE_SENTINEL,
        }
        .to_json()
        .map_err(unreachable)?;

        let response = client
            .post(endpoint_url(backend))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(unreachable)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ProbeFailure::Status(status.as_u16()))
        }
    }
}

fn unreachable(err: impl std::fmt::Display) -> ProbeFailure {
    ProbeFailure::Unreachable(err.to_string())
}
