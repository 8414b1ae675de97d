//! HTTP response types and error mapping
//!
//! Channel endpoints answer with bare JSON arrays. Failures answer with
//! `{"error": "..."}` and the status chosen by [`AppError::status_code`];
//! the underlying error is only written to the log.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::errors::AppError;

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Convert AppError to appropriate HTTP response
pub fn handle_error(error: AppError) -> impl IntoResponse {
    let status = error.status_code();

    if status.is_server_error() {
        error!("Request failed ({}): {}", status, error);
    } else {
        warn!("Request rejected ({}): {}", status, error);
    }

    (status, Json(ErrorResponse::new(error.public_message())))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        handle_error(self).into_response()
    }
}

/// Liveness payload for `/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub uptime_seconds: i64,
    /// Whether the aggregate search catalog is already in memory
    pub catalog_cached: bool,
    pub countries: usize,
}
