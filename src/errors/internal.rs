use thiserror::Error;

/// Internal error type for store operations
///
/// Not exposed via the API - endpoints convert to AuthError or NotesError
/// and the detail is logged server-side only.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("username is already taken")]
    DuplicateUsername,

    #[error("email is already registered")]
    DuplicateEmail,

    #[error("{operation} failed: {message}")]
    Crypto { operation: String, message: String },
}

impl StoreError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> Self {
        StoreError::Database {
            operation: operation.to_string(),
            source,
        }
    }

    pub fn crypto(operation: &str, message: impl Into<String>) -> Self {
        StoreError::Crypto {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}

/// Token validation failures
///
/// Expiry is kept distinct so callers can report it without revealing
/// anything else about why a token was rejected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token is invalid")]
    Invalid,
}

/// Failures raised by the registration and login flows
#[derive(Error, Debug)]
pub enum AuthFlowError {
    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("username is already taken")]
    DuplicateUsername,

    #[error("email is already registered")]
    DuplicateEmail,

    /// Covers both unknown username and wrong password; the two are never
    /// distinguished to the caller
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures raised by the note-management flow
#[derive(Error, Debug)]
pub enum NotesFlowError {
    /// The note does not exist or belongs to a different user; callers
    /// cannot tell which
    #[error("note {0} not found")]
    NotFound(i32),

    #[error(transparent)]
    Store(#[from] StoreError),
}
