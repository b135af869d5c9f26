use crate::server::{
    error::AppError,
    model::user::{Session, UserProfile},
    service::{auth::AuthService, guild::GuildService},
};

impl<'a> AuthService<'a> {
    /// Composes the session returned by the session bridge.
    ///
    /// # Arguments
    /// - `user` - The authenticated user's profile
    ///
    /// # Returns
    /// - `Ok(Session)` - Profile, bot-present guilds and, when configured, a
    ///   service-issued token
    /// - `Err(AppError)` - Database error or token signing failure
    pub async fn session(&self, user: UserProfile) -> Result<Session, AppError> {
        let available_guilds = GuildService::new(self.db)
            .get_available_guilds(&user)
            .await?;

        let token = match self.authenticator.session_tokens() {
            Some(issuer) => Some(issuer.issue(&user)?),
            None => None,
        };

        Ok(Session {
            user,
            available_guilds,
            token,
        })
    }
}
