use crate::engine::{BreakdownItem, DecisionEngine, EngineInputs, Recommendation, Verdict};
use crate::error::AppError;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Shared infrastructure handles threaded through the router as an extension.
#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub inputs: EngineInputs,
    pub score: u8,
    pub recommendation: Recommendation,
    pub explanation: String,
    pub breakdown: Vec<BreakdownItem>,
}

impl EvaluateResponse {
    fn new(inputs: EngineInputs, verdict: Verdict) -> Self {
        Self {
            inputs,
            score: verdict.score,
            recommendation: verdict.recommendation,
            explanation: verdict.explanation,
            breakdown: verdict.breakdown,
        }
    }
}

/// Router exposing the evaluation endpoint plus the service plumbing routes.
pub fn router(engine: Arc<DecisionEngine>) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/evaluate", post(evaluate_endpoint))
        .with_state(engine)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn evaluate_endpoint(
    State(engine): State<Arc<DecisionEngine>>,
    Json(inputs): Json<EngineInputs>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let verdict = engine.evaluate(&inputs)?;

    info!(
        score = verdict.score,
        recommendation = verdict.recommendation.label(),
        "evaluated playthrough"
    );

    Ok(Json(EvaluateResponse::new(inputs, verdict)))
}
