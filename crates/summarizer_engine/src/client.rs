use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

use crate::{HttpSettings, SummaryError};

const JSON: &str = "application/json";

/// Body shared by probes and real submissions.
#[derive(Debug, Serialize)]
pub(crate) struct SummaryRequest<'a> {
    pub url: &'a str,
}

impl SummaryRequest<'_> {
    pub(crate) fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The address requests are posted to: the backend root with a trailing slash.
pub fn endpoint_url(backend: &str) -> String {
    format!("{}/", backend.trim_end_matches('/'))
}

pub(crate) fn build_client(settings: &HttpSettings) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
    if let Some(timeout) = settings.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

#[async_trait::async_trait]
pub trait SummaryClient: Send + Sync {
    async fn summarize(&self, backend: &str, url: &str) -> Result<String, SummaryError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSummaryClient {
    settings: HttpSettings,
}

impl ReqwestSummaryClient {
    pub fn new(settings: HttpSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl SummaryClient for ReqwestSummaryClient {
    async fn summarize(&self, backend: &str, url: &str) -> Result<String, SummaryError> {
        let client = build_client(&self.settings).map_err(transport)?;
        let body = SummaryRequest { url }
            .to_json()
            .map_err(|err| SummaryError::Transport {
                detail: err.to_string(),
            })?;

        let response = client
            .post(endpoint_url(backend))
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(body)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.ok();
            return Err(error_from_body(status.as_u16(), body.as_deref()));
        }

        let bytes = response.bytes().await.map_err(transport)?;
        summary_from_body(&bytes)
    }
}

fn transport(err: reqwest::Error) -> SummaryError {
    SummaryError::Transport {
        detail: err.to_string(),
    }
}

/// Maps a non-success response body to the message the user sees.
///
/// A body that cannot be read counts as unparseable.
fn error_from_body(status: u16, body: Option<&[u8]>) -> SummaryError {
    let Some(value) = body.and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok()) else {
        return SummaryError::UnparseableErrorBody { status };
    };
    match value.get("error").and_then(Value::as_str) {
        Some(message) if !message.is_empty() => SummaryError::Server {
            status,
            message: message.to_string(),
        },
        _ => SummaryError::Status(status),
    }
}

fn summary_from_body(bytes: &[u8]) -> Result<String, SummaryError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| SummaryError::MalformedSummary {
            detail: err.to_string(),
        })?;
    let summary = value
        .get("summary")
        .and_then(Value::as_str)
        .ok_or_else(|| SummaryError::MalformedSummary {
            detail: "missing summary field".to_string(),
        })?;
    if summary.is_empty() {
        return Err(SummaryError::EmptySummary);
    }
    Ok(summary.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_adds_single_trailing_slash() {
        assert_eq!(endpoint_url("http://localhost:8000"), "http://localhost:8000/");
        assert_eq!(endpoint_url("http://localhost:8000/"), "http://localhost:8000/");
        assert_eq!(
            endpoint_url("https://api.example.com/summarize"),
            "https://api.example.com/summarize/"
        );
    }

    #[test]
    fn request_body_carries_url_field() {
        let json = SummaryRequest {
            url: "https://youtu.be/abc",
        }
        .to_json()
        .unwrap();
        assert_eq!(json, r#"{"url":"https://youtu.be/abc"}"#);
    }

    #[test]
    fn error_body_without_error_field_uses_status() {
        assert_eq!(
            error_from_body(502, Some(br#"{"detail":"bad gateway"}"#)),
            SummaryError::Status(502)
        );
        assert_eq!(error_from_body(500, Some(b"[1, 2]")), SummaryError::Status(500));
        assert_eq!(
            error_from_body(400, Some(br#"{"error":""}"#)),
            SummaryError::Status(400)
        );
        assert_eq!(
            error_from_body(400, Some(br#"{"error":42}"#)),
            SummaryError::Status(400)
        );
    }

    #[test]
    fn unreadable_error_body_is_unparseable() {
        assert_eq!(
            error_from_body(500, None),
            SummaryError::UnparseableErrorBody { status: 500 }
        );
        assert_eq!(
            error_from_body(500, Some(b"")),
            SummaryError::UnparseableErrorBody { status: 500 }
        );
    }

    #[test]
    fn summary_body_must_hold_non_empty_summary() {
        assert_eq!(
            summary_from_body(br#"{"summary":"ok"}"#),
            Ok("ok".to_string())
        );
        assert_eq!(
            summary_from_body(br#"{"summary":""}"#),
            Err(SummaryError::EmptySummary)
        );
        assert!(matches!(
            summary_from_body(br#"{"text":"ok"}"#),
            Err(SummaryError::MalformedSummary { .. })
        ));
        assert!(matches!(
            summary_from_body(b"<html>"),
            Err(SummaryError::MalformedSummary { .. })
        ));
    }

    #[test]
    fn messages_match_what_the_form_shows() {
        assert_eq!(
            SummaryError::Transport {
                detail: "connection refused".to_string()
            }
            .to_string(),
            "An error occurred while fetching the summary"
        );
        assert_eq!(SummaryError::Status(503).to_string(), "HTTP error! status: 503");
        assert_eq!(
            SummaryError::Server {
                status: 400,
                message: "Invalid YouTube URL".to_string()
            }
            .to_string(),
            "Invalid YouTube URL"
        );
    }
}
