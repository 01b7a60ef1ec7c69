// Error types for room operations

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error types for room endpoints
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    #[error("{0}")]
    Validation(String),
}

impl RoomError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RoomError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RoomError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "msg": self.to_string(),
        }));

        (self.status_code(), body).into_response()
    }
}
