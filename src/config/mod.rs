// Configuration layer - environment settings and logging setup
pub mod logging;

use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVariable(&'static str),
}

/// Application settings loaded from the environment
///
/// `JWT_SECRET` is mandatory; everything else has a development default.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub bind_addr: String,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://notes.db?mode=rwc".to_string());

        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVariable("JWT_SECRET"))?;

        let jwt_issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "noteboard".to_string());

        let jwt_audience =
            env::var("JWT_AUDIENCE").unwrap_or_else(|_| "noteboard-clients".to_string());

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_issuer,
            jwt_audience,
            bind_addr,
        })
    }
}
