// Services layer - Business logic and orchestration
pub mod auth_service;
pub mod notes_service;
pub mod password;
pub mod token_service;

pub use auth_service::AuthService;
pub use notes_service::NotesService;
pub use token_service::TokenService;
