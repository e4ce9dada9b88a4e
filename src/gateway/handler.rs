use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use crate::scoring::ScoringResult;

/// Body of `POST /check`. A missing or `null` `text` is treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[instrument(skip(state, payload), fields(text_len = tracing::field::Empty))]
pub async fn check_handler(
    State(state): State<HandlerState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<ScoringResult>, GatewayError> {
    let Json(request) = payload.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let text = request.text.unwrap_or_default();
    tracing::Span::current().record("text_len", text.len());

    let checker = state.checker.clone();
    let task = tokio::task::spawn_blocking(move || checker.check(&text));

    // On timeout the blocking task keeps running to completion; its result is dropped.
    let result = tokio::time::timeout(state.embed_timeout, task)
        .await
        .map_err(|_| GatewayError::ProviderTimeout(state.embed_timeout))?
        .map_err(|e| GatewayError::InternalError(format!("scoring task failed: {}", e)))??;

    debug!(
        sentences = result.details.len(),
        overall_score = result.overall_score,
        "Submission checked"
    );

    Ok(Json(result))
}
