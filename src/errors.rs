use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use crate::services::store::StoreError;

pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Main error type for the notifications service
#[derive(Debug)]
pub enum NotificationsError {
    // Validation errors
    MessageRequired,

    // Store errors, split by the operation that hit them
    StoreQuery(String),
    StoreInsert(String),

    // Page rendering errors
    Render(String),

    // Configuration and setup errors
    InvalidConfiguration(String),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl fmt::Display for NotificationsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationsError::MessageRequired => write!(f, "{}", MESSAGE_REQUIRED),
            NotificationsError::StoreQuery(msg) => write!(f, "{}", msg),
            NotificationsError::StoreInsert(msg) => write!(f, "{}", msg),
            NotificationsError::Render(msg) => write!(f, "Page rendering failed: {}", msg),
            NotificationsError::InvalidConfiguration(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for NotificationsError {}

impl IntoResponse for NotificationsError {
    fn into_response(self) -> Response {
        match self {
            NotificationsError::MessageRequired => json_error(StatusCode::BAD_REQUEST, MESSAGE_REQUIRED.to_string()),

            // Read failures surface the store message as the whole body
            NotificationsError::StoreQuery(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),

            NotificationsError::StoreInsert(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, msg),

            other => json_error(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        }
    }
}

fn json_error(status: StatusCode, error: String) -> Response {
    (status, axum::Json(ErrorResponse { error })).into_response()
}

// Convenience type alias for Results
pub type NotificationsResult<T> = Result<T, NotificationsError>;

// Helper functions for mapping store failures onto the operation that hit them
impl NotificationsError {
    pub fn store_query(err: StoreError) -> Self {
        NotificationsError::StoreQuery(err.to_string())
    }

    pub fn store_insert(err: StoreError) -> Self {
        NotificationsError::StoreInsert(err.to_string())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        NotificationsError::Render(msg.into())
    }

    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        NotificationsError::InvalidConfiguration(msg.into())
    }
}
