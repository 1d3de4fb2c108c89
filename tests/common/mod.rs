// Common test utilities for integration tests

use migration::{Migrator, MigratorTrait};
use poem_openapi::auth::Bearer;
use sea_orm::Database;
use std::sync::Arc;

use noteboard_backend::api::{AuthApi, BearerAuth, NotesApi};
use noteboard_backend::services::{AuthService, NotesService, TokenService};
use noteboard_backend::stores::{NoteStore, UserStore};

pub const TEST_JWT_SECRET: &str = "test-secret-key-minimum-32-characters-long";

/// The assembled API surface over an in-memory database
pub struct TestApp {
    pub auth_api: AuthApi,
    pub notes_api: NotesApi,
    pub token_service: Arc<TokenService>,
}

/// Creates the full API stack backed by a fresh in-memory SQLite database
/// with migrations applied
pub async fn setup_test_app() -> TestApp {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let token_service = Arc::new(TokenService::new(
        TEST_JWT_SECRET.to_string(),
        "noteboard".to_string(),
        "noteboard-clients".to_string(),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(UserStore::new(db.clone())),
        token_service.clone(),
    ));
    let notes_service = Arc::new(NotesService::new(Arc::new(NoteStore::new(db))));

    TestApp {
        auth_api: AuthApi::new(auth_service),
        notes_api: NotesApi::new(notes_service, token_service.clone()),
        token_service,
    }
}

/// Wraps a raw token string for handler calls
pub fn bearer(token: &str) -> BearerAuth {
    BearerAuth(Bearer {
        token: token.to_string(),
    })
}
