//! Session bridge between identity provider tokens and local user profiles.

pub mod provider;
pub mod session;
pub mod session_token;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::UserProfileRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserProfileParam, LinkIdentityParam, UserProfile},
    service::auth::{
        provider::{ProviderClaims, ProviderTokenVerifier},
        session_token::{SessionClaims, SessionTokenIssuer},
    },
};

/// A bearer token that passed verification.
#[derive(Debug, Clone)]
pub enum VerifiedToken {
    /// Token minted by this service.
    Session(SessionClaims),
    /// Token minted by the identity provider.
    Provider(ProviderClaims),
}

/// Verifies bearer tokens from either issuer.
#[derive(Clone)]
pub struct Authenticator {
    provider: ProviderTokenVerifier,
    session_tokens: Option<SessionTokenIssuer>,
}

impl Authenticator {
    pub fn new(provider: ProviderTokenVerifier, session_tokens: Option<SessionTokenIssuer>) -> Self {
        Self {
            provider,
            session_tokens,
        }
    }

    /// Builds the authenticator from configuration.
    ///
    /// Uses the shared provider secret when configured and the provider's JWKS
    /// otherwise. Session tokens are only issued and accepted when `JWT_SECRET` is set.
    pub fn from_config(config: &Config, http_client: reqwest::Client) -> Self {
        let issuer = config.supabase_issuer();
        let provider = match &config.supabase_jwt_secret {
            Some(secret) => {
                ProviderTokenVerifier::with_secret(secret, &config.supabase_jwt_audience, &issuer)
            }
            None => ProviderTokenVerifier::with_jwks(
                http_client,
                config.supabase_jwks_url(),
                &config.supabase_jwt_audience,
                &issuer,
            ),
        };

        let session_tokens = config
            .session_jwt_secret
            .as_deref()
            .map(|secret| SessionTokenIssuer::new(secret, config.session_jwt_expiration));

        Self::new(provider, session_tokens)
    }

    pub fn session_tokens(&self) -> Option<&SessionTokenIssuer> {
        self.session_tokens.as_ref()
    }

    /// Verifies a bearer token, trying service-issued tokens first.
    ///
    /// # Returns
    /// - `Ok(VerifiedToken)` - Token accepted by one of the verifiers
    /// - `Err(AuthError::InvalidToken)` - Token rejected by every verifier
    pub async fn verify(&self, token: &str) -> Result<VerifiedToken, AuthError> {
        if let Some(session_tokens) = &self.session_tokens {
            if let Ok(claims) = session_tokens.verify(token) {
                return Ok(VerifiedToken::Session(claims));
            }
        }

        let claims = self.provider.verify(token).await?;

        Ok(VerifiedToken::Provider(claims))
    }
}

/// Resolves authenticated users to local profiles and composes sessions.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub authenticator: &'a Authenticator,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, authenticator: &'a Authenticator) -> Self {
        Self { db, authenticator }
    }

    /// Verifies a bearer token and returns the profile it belongs to.
    ///
    /// Provider tokens resolve or lazily create the profile; service-issued tokens
    /// must refer to an existing profile.
    ///
    /// # Arguments
    /// - `token` - Raw bearer token
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The authenticated user's profile
    /// - `Err(AppError::AuthErr)` - Token rejected, no Discord identity, or the
    ///   profile behind a service-issued token no longer exists
    /// - `Err(AppError::DbErr)` - Database error during resolution
    pub async fn authenticate(&self, token: &str) -> Result<UserProfile, AppError> {
        match self.authenticator.verify(token).await? {
            VerifiedToken::Session(claims) => {
                let user = UserProfileRepository::new(self.db)
                    .find_by_id(claims.sub)
                    .await?
                    .ok_or(AuthError::UserNotInDatabase(claims.sub))?;

                Ok(user)
            }
            VerifiedToken::Provider(claims) => self.resolve_profile(&claims).await,
        }
    }

    /// Finds or creates the profile for verified provider claims.
    ///
    /// Lookup order is provider subject, then Discord ID (which is then linked to the
    /// subject), then creation. Display details are written only when they differ from
    /// the claims, so repeated exchanges with the same token create at most one profile
    /// and leave it untouched.
    ///
    /// # Arguments
    /// - `claims` - Claims of a verified provider token
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - Existing, linked or newly created profile
    /// - `Err(AppError::AuthErr)` - The claims carry no Discord identity
    /// - `Err(AppError::DbErr)` - Database error during lookup or write
    pub async fn resolve_profile(&self, claims: &ProviderClaims) -> Result<UserProfile, AppError> {
        let repo = UserProfileRepository::new(self.db);
        let metadata = &claims.user_metadata;

        let discord_id = metadata
            .discord_id()
            .ok_or_else(|| AuthError::MissingDiscordIdentity(claims.sub.clone()))?
            .to_string();
        let username = metadata
            .display_name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("discord-{}", discord_id));
        let avatar_url = metadata.avatar().map(str::to_string);

        let link = LinkIdentityParam {
            auth_user_id: claims.sub.clone(),
            username: username.clone(),
            avatar_url: avatar_url.clone(),
        };

        if let Some(user) = self.find_existing(&claims.sub, &discord_id).await? {
            return self.refresh_identity(user, link).await;
        }

        let created = repo
            .create(CreateUserProfileParam {
                auth_user_id: Some(claims.sub.clone()),
                discord_id: discord_id.clone(),
                username,
                avatar_url,
            })
            .await;

        match created {
            Ok(user) => {
                tracing::info!("Created profile {} for subject {}", user.id, claims.sub);
                Ok(user)
            }
            Err(err) => {
                // A concurrent exchange or bot registration may have inserted first.
                match self.find_existing(&claims.sub, &discord_id).await? {
                    Some(user) => self.refresh_identity(user, link).await,
                    None => Err(err.into()),
                }
            }
        }
    }

    async fn find_existing(
        &self,
        auth_user_id: &str,
        discord_id: &str,
    ) -> Result<Option<UserProfile>, AppError> {
        let repo = UserProfileRepository::new(self.db);

        let existing = match repo.find_by_auth_user_id(auth_user_id).await? {
            Some(user) => Some(user),
            None => repo.find_by_discord_id(discord_id).await?,
        };

        Ok(existing)
    }

    async fn refresh_identity(
        &self,
        user: UserProfile,
        link: LinkIdentityParam,
    ) -> Result<UserProfile, AppError> {
        if user.has_identity(&link) {
            return Ok(user);
        }

        let linked = UserProfileRepository::new(self.db)
            .link_identity(user.id, link)
            .await?;

        Ok(linked.unwrap_or(user))
    }
}

