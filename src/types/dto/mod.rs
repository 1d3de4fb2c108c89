// Transfer objects exchanged at the API boundary
pub mod auth;
pub mod common;
pub mod notes;
