use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use backlog_triage::api::{router, AppState};
use backlog_triage::engine::DecisionEngine;
use serde_json::{json, Value};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, OnceLock};
use tower::ServiceExt;

// The prometheus recorder is process-global, so every test shares one handle.
fn metrics_handle() -> Arc<metrics_exporter_prometheus::PrometheusHandle> {
    static HANDLE: OnceLock<Arc<metrics_exporter_prometheus::PrometheusHandle>> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            let (_, handle) = PrometheusMetricLayer::pair();
            Arc::new(handle)
        })
        .clone()
}

fn test_app(ready: bool) -> Router {
    let state = AppState {
        readiness: Arc::new(AtomicBool::new(ready)),
        metrics: metrics_handle(),
    };
    router(Arc::new(DecisionEngine::default())).layer(Extension(state))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

fn evaluate_request(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/evaluate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn evaluate_returns_the_full_verdict_payload() {
    let payload = json!({
        "hours_played": 30.0,
        "hours_remaining": 5.0,
        "enjoyment": 9,
        "backlog_pressure": 4,
        "completionist": false,
    });

    let response = test_app(true)
        .oneshot(evaluate_request(&payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["score"], 89);
    assert_eq!(body["recommendation"], "FINISH");
    assert!(body["explanation"].as_str().is_some_and(|s| !s.is_empty()));

    let breakdown = body["breakdown"].as_array().expect("breakdown is a list");
    assert_eq!(breakdown.len(), 3);
    assert_eq!(breakdown[0]["label"], "Enjoyment base");
    assert_eq!(breakdown[0]["value"], 90);
    assert_eq!(breakdown[1]["value"], 7);
    assert_eq!(breakdown[2]["value"], -8);

    assert_eq!(body["inputs"]["hours_played"], 30.0);
}

#[tokio::test]
async fn evaluate_rejects_out_of_range_input_with_422() {
    let payload = json!({
        "hours_played": 10.0,
        "hours_remaining": 5.0,
        "enjoyment": 11,
        "backlog_pressure": 4,
        "completionist": true,
    });

    let response = test_app(true)
        .oneshot(evaluate_request(&payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("enjoyment")));
}

#[tokio::test]
async fn evaluate_rejects_missing_fields() {
    let payload = json!({
        "hours_played": 10.0,
        "enjoyment": 5,
    });

    let response = test_app(true)
        .oneshot(evaluate_request(&payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn health_and_readiness_report_service_state() {
    let response = test_app(true)
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");

    let response = test_app(false)
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["status"], "initializing");
}

#[tokio::test]
async fn metrics_endpoint_renders_prometheus_text() {
    let response = test_app(true)
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("content type set")
        .to_str()
        .expect("header is ascii");
    assert!(content_type.starts_with("text/plain"));
}
