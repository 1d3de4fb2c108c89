// API-facing error enums, one per endpoint group
pub mod auth;
pub mod notes;

pub use auth::AuthError;
pub use notes::NotesError;
