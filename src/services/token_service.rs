use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use std::fmt;

use crate::errors::internal::{StoreError, TokenError};
use crate::types::internal::auth::Claims;

/// Token validity window in days
const TOKEN_VALIDITY_DAYS: i64 = 7;

/// Manages bearer token generation and validation
///
/// Tokens are bearer-only; there is no revocation list, so expiry is the
/// only invalidation path and logout is client-side token discard.
pub struct TokenService {
    secret: String,
    issuer: String,
    audience: String,
    validity_days: i64,
}

impl TokenService {
    /// Create a new TokenService with the given signing secret, issuer, and audience
    pub fn new(secret: String, issuer: String, audience: String) -> Self {
        Self {
            secret,
            issuer,
            audience,
            validity_days: TOKEN_VALIDITY_DAYS,
        }
    }

    /// Issue a signed token for the given user
    ///
    /// Carries the user id as the subject claim and the username as the
    /// display-name claim, valid for 7 days.
    pub fn issue(&self, user_id: i32, username: &str) -> Result<String, StoreError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            name: username.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            exp: now + self.validity_days * 24 * 60 * 60,
            iat: now,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| StoreError::crypto("token signing", e.to_string()))
    }

    /// Validate a token's signature, issuer, audience, and expiry
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })?;

        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("validity_days", &self.validity_days)
            .finish()
    }
}

impl fmt::Display for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TokenService {{ issuer: {}, audience: {}, validity: {}days }}",
            self.issuer, self.audience, self.validity_days
        )
    }
}
