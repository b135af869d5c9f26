//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It includes:
//! - Database connection pool for data persistence
//! - Bearer token authenticator with its shared JWKS cache
//! - Discord REST client for role listing
//! - Shared secret for bot gateway calls

use sea_orm::DatabaseConnection;

use crate::server::service::{auth::Authenticator, discord::DiscordApiClient};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `DiscordApiClient` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `Authenticator` shares its verifier and key cache through an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Verifies provider and service-issued bearer tokens.
    pub authenticator: Authenticator,

    /// Discord REST client authenticated with the bot token.
    pub discord: DiscordApiClient,

    /// Secret the bot presents on gateway calls; gateway calls are rejected when `None`.
    pub bot_gateway_secret: Option<String>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `authenticator` - Bearer token authenticator
    /// - `discord` - Discord REST client
    /// - `bot_gateway_secret` - Shared bot gateway secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        authenticator: Authenticator,
        discord: DiscordApiClient,
        bot_gateway_secret: Option<String>,
    ) -> Self {
        Self {
            db,
            authenticator,
            discord,
            bot_gateway_secret,
        }
    }
}
