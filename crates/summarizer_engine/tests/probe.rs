use std::net::TcpListener;

use summarizer_engine::{HttpSettings, ProbeFailure, Prober, ReqwestProber, PROBE_SENTINEL};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn probe_posts_sentinel_and_accepts_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "url": PROBE_SENTINEL })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let prober = ReqwestProber::new(HttpSettings::default());

    assert_eq!(prober.probe(&server.uri()).await, Ok(()));
}

#[tokio::test]
async fn probe_rejects_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "Invalid YouTube URL"
        })))
        .mount(&server)
        .await;

    let prober = ReqwestProber::new(HttpSettings::default());

    assert_eq!(
        prober.probe(&server.uri()).await,
        Err(ProbeFailure::Status(400))
    );
}

#[tokio::test]
async fn probe_reports_unreachable_backend() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let prober = ReqwestProber::new(HttpSettings::default());

    let result = prober.probe(&format!("http://127.0.0.1:{port}")).await;

    assert!(matches!(result, Err(ProbeFailure::Unreachable(_))));
}
