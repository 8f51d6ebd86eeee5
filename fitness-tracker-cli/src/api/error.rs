use reqwest::StatusCode;
use thiserror::Error;

/// API-specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Not logged in as a trainer")]
    TrainerNotLoggedIn,

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ApiError {
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let msg = error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized(msg),
            StatusCode::NOT_FOUND => ApiError::NotFound(msg),
            StatusCode::CONFLICT => ApiError::Conflict(msg),
            StatusCode::BAD_REQUEST => ApiError::BadRequest(msg),
            status if status.is_server_error() => ApiError::ServerError(msg),
            status if status.is_client_error() => ApiError::BadRequest(msg),
            _ => ApiError::Unknown(msg),
        }
    }

    /// True when the request never got an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::NetworkError(_))
    }
}

/// Pull a readable message out of an `{"error", "message"}` body
fn error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let json: serde_json::Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(_) => return Some(body.trim().to_string()),
    };

    match (json["error"].as_str(), json["message"].as_str()) {
        (Some(error), Some(message)) => Some(format!("{} ({})", error, message)),
        (Some(error), None) => Some(error.to_string()),
        (None, Some(message)) => Some(message.to_string()),
        (None, None) => Some(body.trim().to_string()),
    }
}
