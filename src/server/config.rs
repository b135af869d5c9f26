use chrono::Duration;
use url::Url;

use crate::server::{
    error::{config::ConfigError, AppError},
    util::parse::parse_duration,
};

const DISCORD_API_URL: &str = "https://discord.com/api/v10";
const DEFAULT_AUDIENCE: &str = "authenticated";
const DEFAULT_SESSION_EXPIRATION: &str = "1d";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3001";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,

    /// Base URL of the identity provider project.
    pub supabase_url: String,
    /// Shared HS256 secret; JWKS verification is used when absent.
    pub supabase_jwt_secret: Option<String>,
    pub supabase_jwt_audience: String,

    /// Secret for service-issued session tokens; no token is issued when absent.
    pub session_jwt_secret: Option<String>,
    pub session_jwt_expiration: Duration,

    pub bot_gateway_secret: Option<String>,

    pub discord_bot_token: Option<String>,
    pub discord_api_url: String,

    pub frontend_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let supabase_url = required("SUPABASE_URL")?.trim_end_matches('/').to_string();
        Url::parse(&supabase_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "SUPABASE_URL".to_string(),
            reason: e.to_string(),
        })?;

        let session_jwt_expiration = parse_duration(
            "JWT_EXPIRATION",
            &optional("JWT_EXPIRATION").unwrap_or_else(|| DEFAULT_SESSION_EXPIRATION.to_string()),
        )?;

        let port = match optional("PORT") {
            Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            supabase_url,
            supabase_jwt_secret: optional("SUPABASE_JWT_SECRET"),
            supabase_jwt_audience: optional("SUPABASE_JWT_AUDIENCE")
                .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
            session_jwt_secret: optional("JWT_SECRET"),
            session_jwt_expiration,
            bot_gateway_secret: optional("BOT_GATEWAY_SECRET"),
            discord_bot_token: optional("DISCORD_BOT_TOKEN"),
            discord_api_url: DISCORD_API_URL.to_string(),
            frontend_url: optional("FRONTEND_URL")
                .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            port,
        })
    }

    /// Issuer claim expected on provider tokens.
    ///
    /// Hosted projects (`*.supabase.co`) issue from `<url>/auth/v1`; self-hosted
    /// deployments issue from the configured URL itself.
    pub fn supabase_issuer(&self) -> String {
        if self.supabase_url.contains("supabase.co") {
            format!("{}/auth/v1", self.supabase_url)
        } else {
            self.supabase_url.clone()
        }
    }

    /// Location of the provider's signing key set.
    pub fn supabase_jwks_url(&self) -> String {
        format!("{}/.well-known/jwks.json", self.supabase_issuer())
    }
}
