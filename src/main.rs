use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use noteboard_backend::api::{AuthApi, HealthApi, NotesApi};
use noteboard_backend::config::{logging, Settings};
use noteboard_backend::services::{AuthService, NotesService, TokenService};
use noteboard_backend::stores::{NoteStore, UserStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    logging::init_logging().expect("Failed to initialize logging");

    let settings = Settings::from_env().expect("Failed to load settings");

    let db: DatabaseConnection = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!(url = %settings.database_url, "connected to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    tracing::info!("database migrations completed");

    let token_service = Arc::new(TokenService::new(
        settings.jwt_secret.clone(),
        settings.jwt_issuer.clone(),
        settings.jwt_audience.clone(),
    ));
    let user_store = Arc::new(UserStore::new(db.clone()));
    let note_store = Arc::new(NoteStore::new(db.clone()));
    let auth_service = Arc::new(AuthService::new(user_store, token_service.clone()));
    let notes_service = Arc::new(NotesService::new(note_store));

    let api_service = OpenApiService::new(
        (
            HealthApi,
            AuthApi::new(auth_service),
            NotesApi::new(notes_service, token_service),
        ),
        "Notes API",
        "1.0.0",
    )
    .server(format!("http://{}/api", settings.bind_addr));

    let ui = api_service.swagger_ui();

    // Compose routes: API under /api, Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!(addr = %settings.bind_addr, "starting server");

    Server::new(TcpListener::bind(settings.bind_addr))
        .run(app)
        .await
}
