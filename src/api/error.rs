use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::ServiceError;

/// Error body returned by the resource routers: `{"error": ..., "message": ...}`
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Map a service failure for one route. Storage errors are logged and
    /// replaced by the route's fixed `failure` text.
    pub fn from_service(err: ServiceError, failure_status: StatusCode, failure: &str) -> Self {
        match err {
            ServiceError::NotFound(resource) => {
                ApiError::new(StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            ServiceError::Validation(err) => {
                ApiError::new(StatusCode::BAD_REQUEST, "Invalid request").with_message(err.to_string())
            }
            ServiceError::Repository(err) => {
                tracing::error!("{}: {}", failure, err);
                ApiError::new(failure_status, failure)
            }
        }
    }

    /// Shorthand for routes whose storage failures are plain 500s
    pub fn internal(err: ServiceError, failure: &str) -> Self {
        Self::from_service(err, StatusCode::INTERNAL_SERVER_ERROR, failure)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, "Invalid request").with_message(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
