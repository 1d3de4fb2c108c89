// API layer - HTTP endpoints
pub mod auth;
pub mod health;
pub mod notes;

pub use auth::AuthApi;
pub use health::HealthApi;
pub use notes::NotesApi;

use poem_openapi::{auth::Bearer, SecurityScheme};

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);
