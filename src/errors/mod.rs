pub mod api;
pub mod internal;

pub use api::{AuthError, NotesError};
pub use internal::{AuthFlowError, NotesFlowError, StoreError, TokenError};
