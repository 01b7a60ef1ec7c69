// Authentication and session error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

/// Error type for authentication operations
///
/// Bad credentials collapse into a single variant so a caller cannot tell an
/// unknown email from a wrong password.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    #[error("User already exists.")]
    EmailTaken,

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Not authorized. No token found.")]
    MissingToken,

    #[error("Invalid or expired token.")]
    InvalidToken,

    #[error("Invalid or expired token.")]
    ExpiredToken,

    #[error("User not found.")]
    UserNotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token generation error: {0}")]
    TokenGeneration(String),
}

impl AuthError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::EmailTaken => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::ExpiredToken => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::TokenGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to send to clients
    ///
    /// 500-level causes keep their detail server-side and answer with a
    /// generic message.
    pub fn client_message(&self) -> String {
        match self {
            AuthError::Database(_) | AuthError::PasswordHash(_) | AuthError::TokenGeneration(_) => {
                "Server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::Database(msg) => error!("Database error in auth: {}", msg),
            AuthError::PasswordHash(msg) => error!("Password hashing error: {}", msg),
            AuthError::TokenGeneration(msg) => error!("Token generation error: {}", msg),
            AuthError::MissingToken => warn!("Request to protected route without token"),
            AuthError::InvalidToken | AuthError::ExpiredToken => {
                warn!("Token verification failed")
            }
            _ => {}
        }

        let body = Json(json!({
            "msg": self.client_message(),
        }));

        (self.status_code(), body).into_response()
    }
}
