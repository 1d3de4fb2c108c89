use argon2::{
    password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use rand_core::OsRng;

use crate::errors::internal::StoreError;

/// Hash a plaintext password into a PHC-format digest
///
/// The salt is generated per call and embedded in the digest, so
/// verification needs nothing beyond the digest itself.
pub fn hash_password(plaintext: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StoreError::crypto("password hashing", e.to_string()))
}

/// Verify a plaintext password against a stored digest
///
/// A malformed digest yields `false` rather than an error.
pub fn verify_password(plaintext: &str, digest: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(digest) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed_hash)
        .is_ok()
}
