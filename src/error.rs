//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// No activity with the given name exists in the roster
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    /// The email is already on the activity's participant list
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered {
        /// Activity the signup targeted
        activity: String,
        /// Email that was already registered
        email: String,
    },

    /// The email is not on the activity's participant list
    #[error("{email} is not signed up for {activity}")]
    NotRegistered {
        /// Activity the unregister targeted
        activity: String,
        /// Email that was not registered
        email: String,
    },

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ActivityNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::AlreadyRegistered { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotRegistered { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
