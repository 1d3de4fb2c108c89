use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::errors::internal::{NotesFlowError, StoreError, TokenError};
use crate::types::dto::common::ErrorResponse;

/// Note-management error types
#[derive(ApiResponse, Debug)]
pub enum NotesError {
    /// Request failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Missing, invalid, or expired bearer token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Note does not exist for the authenticated user
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl NotesError {
    /// Create a ValidationFailed error
    pub fn validation_failed(message: impl Into<String>) -> Self {
        NotesError::ValidationFailed(Json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create an Unauthorized error
    pub fn unauthorized() -> Self {
        NotesError::Unauthorized(Json(ErrorResponse {
            error: "unauthorized".to_string(),
            message: "A valid bearer token is required".to_string(),
            status_code: 401,
        }))
    }

    /// Create an Unauthorized error for an expired token
    pub fn expired_token() -> Self {
        NotesError::Unauthorized(Json(ErrorResponse {
            error: "expired_token".to_string(),
            message: "Token has expired".to_string(),
            status_code: 401,
        }))
    }

    /// Create a NotFound error
    ///
    /// Used both when the note does not exist and when it belongs to a
    /// different user, so the two cases are indistinguishable.
    pub fn not_found(id: i32) -> Self {
        NotesError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: format!("Note with id {} not found", id),
            status_code: 404,
        }))
    }

    /// Create an InternalError with a generic client-facing message
    pub fn internal_error() -> Self {
        NotesError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An unexpected error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            NotesError::ValidationFailed(json) => json.0.message.clone(),
            NotesError::Unauthorized(json) => json.0.message.clone(),
            NotesError::NotFound(json) => json.0.message.clone(),
            NotesError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<NotesFlowError> for NotesError {
    fn from(err: NotesFlowError) -> Self {
        match err {
            NotesFlowError::NotFound(id) => NotesError::not_found(id),
            NotesFlowError::Store(store_err) => store_err.into(),
        }
    }
}

impl From<StoreError> for NotesError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "notes request failed");
        NotesError::internal_error()
    }
}

impl From<TokenError> for NotesError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => NotesError::expired_token(),
            TokenError::Invalid => NotesError::unauthorized(),
        }
    }
}

impl fmt::Display for NotesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
