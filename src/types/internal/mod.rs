// Internal types shared between services, never serialized to clients
pub mod auth;
