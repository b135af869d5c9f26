//! Service-issued session tokens.
//!
//! When a signing secret is configured the session bridge hands the dashboard its own
//! short-lived HS256 token, which the auth guard accepts alongside provider tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, internal::InternalError},
    model::user::UserProfile,
};

/// Issuer claim stamped on every session token.
pub const SESSION_TOKEN_ISSUER: &str = "guildboard";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Internal user profile ID.
    pub sub: Uuid,
    pub discord_id: String,
    pub username: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct SessionTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl SessionTokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Signs a token for the given profile, valid for the configured lifetime.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(InternalError::TokenSigning)` - Encoding failed
    pub fn issue(&self, user: &UserProfile) -> Result<String, InternalError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user.id,
            discord_id: user.discord_id.clone(),
            username: user.username.clone(),
            iss: SESSION_TOKEN_ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(InternalError::TokenSigning)
    }

    /// Verifies a token previously produced by [`SessionTokenIssuer::issue`].
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        validation.set_issuer(&[SESSION_TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
