//! Verification of identity provider access tokens.
//!
//! Tokens are verified either with the project's shared HS256 secret or, when no
//! secret is configured, against the provider's published JWKS (RS256 or ES256).

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::server::error::auth::AuthError;

/// How long a fetched key set is trusted before it is refetched.
const JWKS_CACHE_TTL: Duration = Duration::from_secs(600);
/// Minimum gap between refetches triggered by an unknown `kid`.
const JWKS_MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Claims read from a verified provider token.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderClaims {
    /// Provider user ID, stable across logins.
    pub sub: String,
    #[serde(default)]
    pub user_metadata: ProviderUserMetadata,
}

/// Discord profile data the provider copies from the OAuth handshake.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderUserMetadata {
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl ProviderUserMetadata {
    /// Discord user ID, preferring `provider_id` over the nested `sub`.
    pub fn discord_id(&self) -> Option<&str> {
        non_empty(&self.provider_id).or_else(|| non_empty(&self.sub))
    }

    pub fn display_name(&self) -> Option<&str> {
        non_empty(&self.full_name)
            .or_else(|| non_empty(&self.name))
            .or_else(|| non_empty(&self.user_name))
    }

    pub fn avatar(&self) -> Option<&str> {
        non_empty(&self.avatar_url).or_else(|| non_empty(&self.picture))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

struct CachedJwks {
    set: JwkSet,
    fetched_at: Instant,
}

enum KeySource {
    Secret(DecodingKey),
    Jwks {
        url: String,
        http_client: reqwest::Client,
        cache: RwLock<Option<CachedJwks>>,
        ttl: Duration,
        min_refresh_interval: Duration,
    },
}

struct VerifierInner {
    audience: String,
    issuer: String,
    keys: KeySource,
}

/// Verifies provider-issued bearer tokens.
///
/// Cheap to clone; the JWKS cache is shared between clones.
#[derive(Clone)]
pub struct ProviderTokenVerifier {
    inner: Arc<VerifierInner>,
}

impl ProviderTokenVerifier {
    /// Creates a verifier for HS256 tokens signed with a shared secret.
    ///
    /// # Arguments
    /// - `secret` - The project's JWT secret
    /// - `audience` - Required `aud` claim
    /// - `issuer` - Required `iss` claim
    pub fn with_secret(secret: &str, audience: &str, issuer: &str) -> Self {
        Self::new(
            KeySource::Secret(DecodingKey::from_secret(secret.as_bytes())),
            audience,
            issuer,
        )
    }

    /// Creates a verifier that resolves signing keys from a JWKS endpoint.
    ///
    /// The key set is fetched lazily on first use.
    ///
    /// # Arguments
    /// - `http_client` - Client used to fetch the key set
    /// - `jwks_url` - Location of the key set
    /// - `audience` - Required `aud` claim
    /// - `issuer` - Required `iss` claim
    pub fn with_jwks(
        http_client: reqwest::Client,
        jwks_url: String,
        audience: &str,
        issuer: &str,
    ) -> Self {
        Self::new(
            KeySource::Jwks {
                url: jwks_url,
                http_client,
                cache: RwLock::new(None),
                ttl: JWKS_CACHE_TTL,
                min_refresh_interval: JWKS_MIN_REFRESH_INTERVAL,
            },
            audience,
            issuer,
        )
    }

    fn new(keys: KeySource, audience: &str, issuer: &str) -> Self {
        Self {
            inner: Arc::new(VerifierInner {
                audience: audience.to_string(),
                issuer: issuer.to_string(),
                keys,
            }),
        }
    }

    /// Verifies signature, expiry, audience and issuer of a token.
    ///
    /// # Arguments
    /// - `token` - Raw bearer token
    ///
    /// # Returns
    /// - `Ok(ProviderClaims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Any verification failure, including an
    ///   unknown signing key or an unreachable key set
    pub async fn verify(&self, token: &str) -> Result<ProviderClaims, AuthError> {
        match &self.inner.keys {
            KeySource::Secret(key) => self.decode(token, key, Algorithm::HS256),
            KeySource::Jwks { .. } => {
                let header = decode_header(token)
                    .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

                if !matches!(header.alg, Algorithm::RS256 | Algorithm::ES256) {
                    return Err(AuthError::InvalidToken(format!(
                        "unsupported algorithm {:?}",
                        header.alg
                    )));
                }

                let kid = header
                    .kid
                    .ok_or_else(|| AuthError::InvalidToken("token header has no kid".to_string()))?;

                let key = self.jwks_key(&kid).await?;
                self.decode(token, &key, header.alg)
            }
        }
    }

    fn decode(
        &self,
        token: &str,
        key: &DecodingKey,
        algorithm: Algorithm,
    ) -> Result<ProviderClaims, AuthError> {
        let mut validation = Validation::new(algorithm);
        validation.set_audience(&[&self.inner.audience]);
        validation.set_issuer(&[&self.inner.issuer]);
        validation.set_required_spec_claims(&["exp", "sub", "aud", "iss"]);

        decode::<ProviderClaims>(token, key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Resolves the decoding key for `kid`, refetching the key set when it is stale
    /// or does not contain the key.
    async fn jwks_key(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        let KeySource::Jwks {
            url,
            http_client,
            cache,
            ttl,
            min_refresh_interval,
        } = &self.inner.keys
        else {
            return Err(AuthError::InvalidToken(
                "verifier has no key set".to_string(),
            ));
        };

        {
            let cached = cache.read().await;
            if let Some(cached) = cached.as_ref() {
                let age = cached.fetched_at.elapsed();
                if age < *ttl {
                    if let Some(jwk) = cached.set.find(kid) {
                        return DecodingKey::from_jwk(jwk)
                            .map_err(|e| AuthError::InvalidToken(e.to_string()));
                    }
                    if age < *min_refresh_interval {
                        return Err(AuthError::InvalidToken(format!("unknown key id {}", kid)));
                    }
                }
            }
        }

        tracing::debug!("Fetching JWKS from {}", url);
        let set = fetch_jwks(http_client, url).await.map_err(|e| {
            tracing::warn!("Failed to fetch JWKS from {}: {}", url, e);
            AuthError::InvalidToken("signing keys unavailable".to_string())
        })?;

        let key = match set.find(kid) {
            Some(jwk) => {
                DecodingKey::from_jwk(jwk).map_err(|e| AuthError::InvalidToken(e.to_string()))
            }
            None => Err(AuthError::InvalidToken(format!("unknown key id {}", kid))),
        };

        *cache.write().await = Some(CachedJwks {
            set,
            fetched_at: Instant::now(),
        });

        key
    }
}

async fn fetch_jwks(http_client: &reqwest::Client, url: &str) -> Result<JwkSet, reqwest::Error> {
    http_client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<JwkSet>()
        .await
}
