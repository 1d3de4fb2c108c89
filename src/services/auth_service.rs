use std::sync::Arc;

use crate::errors::internal::{AuthFlowError, StoreError};
use crate::services::{password, TokenService};
use crate::stores::UserStore;
use crate::types::dto::auth::{AuthResponse, LoginRequest, RegisterRequest};

/// Authentication service that orchestrates the registration and login flows
///
/// Both flows are stateless per call; the only artifact of a successful
/// call is the issued bearer token.
pub struct AuthService {
    user_store: Arc<UserStore>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(user_store: Arc<UserStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_store,
            token_service,
        }
    }

    /// Register a new account and issue its first token
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthFlowError> {
        if request.password != request.confirm_password {
            return Err(AuthFlowError::PasswordMismatch);
        }

        if self
            .user_store
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AuthFlowError::DuplicateUsername);
        }

        let password_hash = password::hash_password(&request.password)?;

        let user = self
            .user_store
            .create(
                request.username.clone(),
                request.email.clone(),
                password_hash,
            )
            .await
            .map_err(|e| match e {
                StoreError::DuplicateUsername => AuthFlowError::DuplicateUsername,
                StoreError::DuplicateEmail => AuthFlowError::DuplicateEmail,
                other => AuthFlowError::Store(other),
            })?;

        let token = self.token_service.issue(user.id, &user.username)?;

        Ok(AuthResponse {
            token,
            username: user.username,
        })
    }

    /// Verify credentials and issue a token
    ///
    /// An unknown username and a wrong password produce the same failure,
    /// so callers cannot enumerate accounts.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthFlowError> {
        let Some(user) = self.user_store.find_by_username(&request.username).await? else {
            return Err(AuthFlowError::InvalidCredentials);
        };

        if !password::verify_password(&request.password, &user.password_hash) {
            return Err(AuthFlowError::InvalidCredentials);
        }

        self.user_store.record_login(user.id).await?;

        let token = self.token_service.issue(user.id, &user.username)?;

        Ok(AuthResponse {
            token,
            username: user.username,
        })
    }
}
