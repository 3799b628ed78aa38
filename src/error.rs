use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Everything a handler can fail with. Domain refusals carry the exact
/// message the client sees; store failures keep the driver text.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Activity is at maximum capacity")]
    AtCapacity,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt participant roster: {0}")]
    CorruptRoster(#[from] serde_json::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::ActivityNotFound => StatusCode::NOT_FOUND,
            ApiError::AlreadySignedUp | ApiError::AtCapacity | ApiError::NotSignedUp => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Database(_) | ApiError::CorruptRoster(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("request failed: {}", self);
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
