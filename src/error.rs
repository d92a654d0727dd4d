//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Validation Errors**: Caller supplied a bad transaction field; reported
///   immediately, never retried, never logged as system faults
/// - **Lookup Errors**: No balance record for the requested (handle, application) pair
/// - **Database Errors**: Any sqlx::Error from database operations
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Transaction has an empty customer handle.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("handle not provided")]
    HandleNotProvided,

    /// Transaction amount is zero.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("invalid amount")]
    InvalidAmount,

    /// Currency code is empty or longer than three characters.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("invalid currency format")]
    InvalidCurrencyFormat,

    /// Transaction has an empty application name.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("missing application")]
    MissingApplication,

    /// No balance record exists for the (handle, application) pair.
    ///
    /// Returns HTTP 404 Not Found. The service never creates a record in
    /// response to this; creation is an explicit administrative action.
    #[error("customer not found")]
    CustomerNotFound,

    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - Validation variants → 400 Bad Request
/// - `CustomerNotFound` → 404 Not Found
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::HandleNotProvided => (
                StatusCode::BAD_REQUEST,
                "handle_not_provided",
                self.to_string(),
            ),
            AppError::InvalidAmount => {
                (StatusCode::BAD_REQUEST, "invalid_amount", self.to_string())
            }
            AppError::InvalidCurrencyFormat => (
                StatusCode::BAD_REQUEST,
                "invalid_currency_format",
                self.to_string(),
            ),
            AppError::MissingApplication => (
                StatusCode::BAD_REQUEST,
                "missing_application",
                self.to_string(),
            ),
            AppError::CustomerNotFound => (
                StatusCode::NOT_FOUND,
                "customer_not_found",
                self.to_string(),
            ),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
