use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::api::AuthError;
use crate::services::AuthService;
use crate::types::dto::auth::{AuthResponse, LoginRequest, RegisterRequest};

/// Authentication API endpoints
pub struct AuthApi {
    auth_service: Arc<AuthService>,
}

impl AuthApi {
    /// Create a new AuthApi backed by the given AuthService
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Register a new account and receive an authentication token
    #[oai(path = "/register", method = "post", tag = "AuthTags::Authentication")]
    pub async fn register(&self, body: Json<RegisterRequest>) -> Result<Json<AuthResponse>, AuthError> {
        let response = self.auth_service.register(&body.0).await?;

        Ok(Json(response))
    }

    /// Login with username and password to receive an authentication token
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    pub async fn login(&self, body: Json<LoginRequest>) -> Result<Json<AuthResponse>, AuthError> {
        let response = self.auth_service.login(&body.0).await?;

        Ok(Json(response))
    }
}
