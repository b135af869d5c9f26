use axum::http::HeaderMap;

use crate::server::{error::auth::AuthError, middleware::auth::bearer_token};

/// Guard for endpoints called by the Discord bot with the shared gateway secret.
pub struct BotGatewayGuard<'a> {
    secret: Option<&'a str>,
    headers: &'a HeaderMap,
}

impl<'a> BotGatewayGuard<'a> {
    pub fn new(secret: Option<&'a str>, headers: &'a HeaderMap) -> Self {
        Self { secret, headers }
    }

    /// Checks the bearer token against the configured secret.
    ///
    /// Every request is rejected when no secret is configured.
    ///
    /// # Returns
    /// - `Ok(())` - The caller presented the gateway secret
    /// - `Err(AuthError::InvalidBotCredentials)` - Missing, wrong or unconfigured secret
    pub fn require(&self) -> Result<(), AuthError> {
        let Some(secret) = self.secret else {
            tracing::warn!("Rejected bot gateway call: BOT_GATEWAY_SECRET is not configured");
            return Err(AuthError::InvalidBotCredentials);
        };

        match bearer_token(self.headers) {
            Some(token) if constant_time_eq(token.as_bytes(), secret.as_bytes()) => Ok(()),
            _ => Err(AuthError::InvalidBotCredentials),
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
