use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::patient::PatientError;
use thiserror::Error;
use tracing::error;

/// Error returned by handlers; rendered as `{"error": ..., "code": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub code: Option<u16>,
}

impl From<PatientError> for ApiError {
    fn from(e: PatientError) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: e.to_string(), code: Some(e.code()) }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "request failed");
        }
        let body = serde_json::json!({"error": self.message, "code": self.code});
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}
