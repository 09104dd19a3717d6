use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use pediguide_core::error::CoreError;
use pediguide_forms::error::{ConfigErrors, FieldError, SubmissionErrors};
use pediguide_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// No credentials at all.
    Unauthorized(String),
    /// Credentials present but not acceptable.
    Forbidden(String),
    /// Rejected form configuration.
    Validation(Vec<String>),
    /// Rejected questionnaire answers.
    InvalidSubmission(Vec<FieldError>),
    Unavailable(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, json!({ "error": msg })),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, json!({ "error": msg })),
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Validation error", "details": details }),
            ),
            ApiError::InvalidSubmission(field_errors) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Validation error", "fieldErrors": field_errors }),
            ),
            ApiError::Unavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, json!({ "error": msg }))
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { key } => ApiError::NotFound(format!("object not found: {key}")),
            StorageError::Conflict(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ConfigErrors> for ApiError {
    fn from(e: ConfigErrors) -> Self {
        ApiError::Validation(e.into_messages())
    }
}

impl From<SubmissionErrors> for ApiError {
    fn from(e: SubmissionErrors) -> Self {
        ApiError::InvalidSubmission(e.0)
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<pediguide_auth::AuthError> for ApiError {
    fn from(e: pediguide_auth::AuthError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<pediguide_kyc::KycError> for ApiError {
    fn from(e: pediguide_kyc::KycError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<pediguide_export::error::ExportError> for ApiError {
    fn from(e: pediguide_export::error::ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
