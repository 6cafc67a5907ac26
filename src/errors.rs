use crate::models::FieldError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Body text for every 400 response.
pub const INVALID_DATA: &str = "invalid data";
/// Body text for every 500 response.
pub const INTERNAL_SERVER_ERROR: &str = "internal server error";

/// Application-specific error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// One or more fields failed validation. Recoverable by the caller.
    Validation(Vec<FieldError>),
    /// The request body could not be read as JSON.
    MalformedBody(String),
    /// Any other unexpected failure.
    InternalError(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} ({})", err.field, err.message)?;
                }
                Ok(())
            }
            AppError::MalformedBody(msg) => write!(f, "Malformed body: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Validation failures carry their field details; everything else is
    /// reported with a generic message and only logged server-side.
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(details) => {
                tracing::warn!("Rejected submission with {} field error(s)", details.len());
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": INVALID_DATA,
                        "details": details,
                    })),
                )
                    .into_response()
            }
            AppError::MalformedBody(msg) => {
                tracing::error!("Malformed request body: {}", msg);
                internal_error_response()
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_error_response()
            }
        }
    }
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_SERVER_ERROR })),
    )
        .into_response()
}

impl From<Vec<FieldError>> for AppError {
    fn from(errors: Vec<FieldError>) -> Self {
        AppError::Validation(errors)
    }
}

impl From<serde_json::Error> for AppError {
    /// Unreadable JSON is not a validation problem; it surfaces as a 500.
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedBody(err.to_string())
    }
}
