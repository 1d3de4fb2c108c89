use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::errors::internal::{AuthFlowError, StoreError};
use crate::types::dto::common::ErrorResponse;

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Request failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Invalid username or password
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Username or email already exists
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AuthError {
    /// Create a ValidationFailed error
    pub fn validation_failed(message: impl Into<String>) -> Self {
        AuthError::ValidationFailed(Json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(ErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid username or password".to_string(),
            status_code: 401,
        }))
    }

    /// Create a Conflict error for a duplicate username
    pub fn duplicate_username() -> Self {
        AuthError::Conflict(Json(ErrorResponse {
            error: "duplicate_username".to_string(),
            message: "Username already exists".to_string(),
            status_code: 409,
        }))
    }

    /// Create a Conflict error for a duplicate email
    pub fn duplicate_email() -> Self {
        AuthError::Conflict(Json(ErrorResponse {
            error: "duplicate_email".to_string(),
            message: "Email already registered".to_string(),
            status_code: 409,
        }))
    }

    /// Create an InternalError with a generic client-facing message
    pub fn internal_error() -> Self {
        AuthError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An unexpected error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::ValidationFailed(json) => json.0.message.clone(),
            AuthError::InvalidCredentials(json) => json.0.message.clone(),
            AuthError::Conflict(json) => json.0.message.clone(),
            AuthError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<AuthFlowError> for AuthError {
    fn from(err: AuthFlowError) -> Self {
        match err {
            AuthFlowError::PasswordMismatch => {
                AuthError::validation_failed("Passwords do not match")
            }
            AuthFlowError::DuplicateUsername => AuthError::duplicate_username(),
            AuthFlowError::DuplicateEmail => AuthError::duplicate_email(),
            AuthFlowError::InvalidCredentials => AuthError::invalid_credentials(),
            AuthFlowError::Store(store_err) => store_err.into(),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "auth request failed");
        AuthError::internal_error()
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
