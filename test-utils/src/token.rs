//! Signed test tokens shaped like identity provider access tokens.
//!
//! Tokens are signed with HS256 using [`TEST_JWT_SECRET`] and carry the audience and
//! issuer a hosted project at [`TEST_SUPABASE_URL`] would produce. Calling
//! [`ProviderTokenBuilder::rs256`] signs with the fixture RSA key instead, whose public
//! half [`test_jwks`] publishes.
//!
//! ```rust,ignore
//! use test_utils::token::ProviderTokenBuilder;
//!
//! let token = ProviderTokenBuilder::new("auth-subject")
//!     .discord_id("123456789")
//!     .full_name("Tester")
//!     .sign()?;
//! ```

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Map, Value};

use crate::error::TestError;

/// Shared secret used to sign provider tokens in tests.
pub const TEST_JWT_SECRET: &str = "test-provider-secret-with-enough-length";

/// Project URL whose derived issuer test tokens carry.
pub const TEST_SUPABASE_URL: &str = "https://test-project.supabase.co";

/// Issuer claim matching [`TEST_SUPABASE_URL`].
pub const TEST_ISSUER: &str = "https://test-project.supabase.co/auth/v1";

/// Audience claim used by the identity provider for signed-in users.
pub const TEST_AUDIENCE: &str = "authenticated";

/// Key ID of the fixture RSA key in [`test_jwks`] documents by default.
pub const TEST_RSA_KID: &str = "test-rsa-key";

const TEST_RSA_PRIVATE_KEY: &str = include_str!("../fixtures/rsa_private.pem");
const TEST_RSA_MODULUS: &str = "l43KcmsfQYd82E5QWvRIuyQstetYDy5uZISAjGI6j7-hBGUOEUP7QvKBbtwvrb0LB5w2N7WCZoKR6nB0tTXn-bLpOZoBuLf0zBlPjiC7cJ0lf11BZ7FCYwQYkPgbslKAxL98aSlWTAjpsjWZVlbZIVygv0NWsOisNEW48ZXQz2_ZSZdhRdXLYD0wQYU6Udy6wAQ_L4sb6QqGhxqPTxtwxreHFkrxrdfFDe92hPKVqYq9LTYwVp5n5V-B2Pc4takGiH4Hoef2MunESu14Q7432PFcYitSOjzqUdvcvkxy4qGNLUFltzT7kbp3N7TH2IUm8GyeWX5x47dTfOL1_p43yQ";
const TEST_RSA_EXPONENT: &str = "AQAB";

/// Builds a JWKS document publishing the fixture RSA public key under each key ID.
///
/// # Arguments
/// - `kids` - Key IDs to publish; all share the same key material
///
/// # Returns
/// - `Value` - JSON object of the form `{ "keys": [...] }`
pub fn test_jwks(kids: &[&str]) -> Value {
    let keys: Vec<Value> = kids
        .iter()
        .map(|kid| {
            json!({
                "kty": "RSA",
                "use": "sig",
                "alg": "RS256",
                "kid": kid,
                "n": TEST_RSA_MODULUS,
                "e": TEST_RSA_EXPONENT,
            })
        })
        .collect();

    json!({ "keys": keys })
}

enum SigningKey {
    Secret(String),
    Rsa { kid: Option<String> },
}

/// Builder for provider tokens.
pub struct ProviderTokenBuilder {
    subject: String,
    audience: String,
    issuer: String,
    signing: SigningKey,
    expires_in: Duration,
    metadata: Map<String, Value>,
}

impl ProviderTokenBuilder {
    /// Creates a builder for the given subject with valid defaults.
    ///
    /// Defaults:
    /// - audience: [`TEST_AUDIENCE`]
    /// - issuer: [`TEST_ISSUER`]
    /// - secret: [`TEST_JWT_SECRET`]
    /// - expiry: one hour from now
    /// - user metadata: empty
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            audience: TEST_AUDIENCE.to_string(),
            issuer: TEST_ISSUER.to_string(),
            signing: SigningKey::Secret(TEST_JWT_SECRET.to_string()),
            expires_in: Duration::hours(1),
            metadata: Map::new(),
        }
    }

    /// Sets the Discord user ID reported by the OAuth provider.
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.metadata
            .insert("provider_id".to_string(), Value::String(discord_id.into()));
        self
    }

    /// Sets the display name reported by the OAuth provider.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.metadata
            .insert("full_name".to_string(), Value::String(full_name.into()));
        self
    }

    /// Sets the avatar URL reported by the OAuth provider.
    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.metadata
            .insert("avatar_url".to_string(), Value::String(avatar_url.into()));
        self
    }

    /// Overrides the audience claim.
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// Overrides the issuer claim.
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Signs with a different secret.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.signing = SigningKey::Secret(secret.into());
        self
    }

    /// Signs with RS256 using the fixture RSA key, naming `kid` in the header.
    ///
    /// Passing `None` omits the `kid` header.
    pub fn rs256(mut self, kid: Option<&str>) -> Self {
        self.signing = SigningKey::Rsa {
            kid: kid.map(str::to_string),
        };
        self
    }

    /// Sets the lifetime relative to now; negative values produce expired tokens.
    pub fn expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Signs the token with the configured key.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(TestError::Token)` - Encoding failed
    pub fn sign(self) -> Result<String, TestError> {
        let now = Utc::now();
        let claims = json!({
            "sub": self.subject,
            "aud": self.audience,
            "iss": self.issuer,
            "iat": now.timestamp(),
            "exp": (now + self.expires_in).timestamp(),
            "role": "authenticated",
            "user_metadata": Value::Object(self.metadata),
        });

        let token = match &self.signing {
            SigningKey::Secret(secret) => encode(
                &Header::default(),
                &claims,
                &EncodingKey::from_secret(secret.as_bytes()),
            )?,
            SigningKey::Rsa { kid } => {
                let mut header = Header::new(Algorithm::RS256);
                header.kid = kid.clone();
                encode(
                    &header,
                    &claims,
                    &EncodingKey::from_rsa_pem(TEST_RSA_PRIVATE_KEY.as_bytes())?,
                )?
            }
        };

        Ok(token)
    }
}
