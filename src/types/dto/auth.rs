use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Request model for user registration
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired username
    #[oai(validator(min_length = 1, max_length = 50))]
    pub username: String,

    /// Account email address
    #[oai(validator(min_length = 3, max_length = 100))]
    pub email: String,

    /// Password for authentication
    pub password: String,

    /// Password confirmation, must match `password`
    #[oai(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Request model for user login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username for authentication
    pub username: String,

    /// Password for authentication
    pub password: String,
}

/// Response model returned by both registration and login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed bearer token carrying the user's identity claims
    pub token: String,

    /// Username of the authenticated user
    pub username: String,
}
