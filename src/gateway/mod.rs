//! HTTP gateway (Axum): `POST /check` plus health/readiness probes.
//!
//! Cross-origin requests are allowed from any origin.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::{ErrorResponse, GatewayError};
pub use handler::{CheckRequest, check_handler};
pub use state::HandlerState;

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/check", post(check_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub corpus_entries: usize,
    pub embedding_dim: usize,
    pub embedder_mode: String,
    pub threshold: f64,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
        .into_response()
}

/// The corpus is built before the router exists, so a served request is always ready.
#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let corpus = state.checker.scorer().corpus();

    (
        StatusCode::OK,
        Json(ReadyResponse {
            status: "ok".to_string(),
            corpus_entries: corpus.len(),
            embedding_dim: corpus.embedding_dim(),
            embedder_mode: state.embedder_mode().to_string(),
            threshold: state.checker.threshold(),
        }),
    )
        .into_response()
}
