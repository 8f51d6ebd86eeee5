use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::Role;
use crate::models::ValidationError;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Email already exists")]
    EmailAlreadyExists,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Missing authorization header")]
    MissingAuthHeader,
    #[error("Invalid authorization header format")]
    InvalidAuthHeaderFormat,
    #[error("Token was not issued to a {0}")]
    WrongRole(Role),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    MalformedBody(String),
    #[error("Failed to register {0}")]
    RegistrationFailed(Role),
    #[error("Authentication failed")]
    LoginFailed,
}

impl AuthError {
    fn status_and_label(&self) -> (StatusCode, &'static str) {
        match self {
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Authentication failed"),
            AuthError::EmailAlreadyExists => (StatusCode::CONFLICT, "Email already exists"),
            AuthError::InvalidToken
            | AuthError::TokenExpired
            | AuthError::MissingAuthHeader
            | AuthError::InvalidAuthHeaderFormat
            | AuthError::WrongRole(_) => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AuthError::Validation(_) | AuthError::MalformedBody(_) => {
                (StatusCode::BAD_REQUEST, "Invalid request")
            }
            AuthError::RegistrationFailed(Role::User) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to register user")
            }
            AuthError::RegistrationFailed(Role::Trainer) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to register trainer")
            }
            AuthError::LoginFailed => (StatusCode::INTERNAL_SERVER_ERROR, "Authentication failed"),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status_and_label().0
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_label();

        let body = Json(json!({
            "error": error_message,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
