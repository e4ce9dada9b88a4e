use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::constants::NO_TEXT_PROVIDED;
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{}", NO_TEXT_PROVIDED)]
    NoTextProvided,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("scoring failed: {0}")]
    ScoringFailed(ScoringError),

    #[error("embedding timed out after {}ms", .0.as_millis())]
    ProviderTimeout(Duration),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<ScoringError> for GatewayError {
    fn from(err: ScoringError) -> Self {
        if err.is_client_error() {
            GatewayError::NoTextProvided
        } else {
            GatewayError::ScoringFailed(err)
        }
    }
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::NoTextProvided | GatewayError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::ScoringFailed(_) | GatewayError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::ProviderTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
