use thiserror::Error;

/// Internal issues indicating unexpected behavior or unavailable integrations.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to sign a service-issued session token.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to sign session token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),

    /// The Discord REST API answered with a non-success status.
    #[error("Discord API request to {path} failed with status {status}")]
    DiscordApi {
        /// Request path relative to the API base URL
        path: String,
        /// HTTP status returned by Discord
        status: u16,
    },

    /// A Discord API call was needed but no bot token is configured.
    #[error("DISCORD_BOT_TOKEN is not configured")]
    DiscordNotConfigured,
}
