//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_core::ClientError;
use serde::Serialize;

/// Application-level errors with HTTP status code mapping.
#[derive(Debug)]
#[allow(dead_code)]
pub enum AppError {
    /// The upstream call failed; surfaced as 502.
    Upstream(ClientError),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        AppError::Upstream(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Upstream(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
