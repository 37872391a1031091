use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Error returned by handlers: a status code plus a short message for the client.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_id() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Expected id as an integer.")
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.")
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let code = e.code();
        match e {
            ServiceError::Validation(msg) => ApiError::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::NotFound(_) => ApiError::new(StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::Conflict(msg) => ApiError::new(StatusCode::CONFLICT, msg),
            ServiceError::Unimplemented(what) => {
                warn!(operation = what, code, "unimplemented operation requested");
                ApiError::new(StatusCode::NOT_IMPLEMENTED, format!("{what} is not implemented"))
            }
            ServiceError::Internal(detail) => {
                error!(error = %detail, code, "internal service error");
                ApiError::internal()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
}

/// Response for a handler panic: the same JSON 500 body as any other internal error.
pub fn panic_response(_payload: Box<dyn Any + Send + 'static>) -> Response {
    error!(event = "handler_panic", "request handler panicked");
    ApiError::internal().into_response()
}
