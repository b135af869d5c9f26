//! Discord REST API access using the bot token.

use serde::Deserialize;

use crate::{
    model::guild::GuildRoleDto,
    server::error::{internal::InternalError, AppError},
};

/// Role object as returned by `GET /guilds/{guild.id}/roles`.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordRole {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub position: i64,
    /// Roles owned by integrations such as other bots.
    #[serde(default)]
    pub managed: bool,
}

#[derive(Clone)]
pub struct DiscordApiClient {
    http_client: reqwest::Client,
    base_url: String,
    bot_token: Option<String>,
}

impl DiscordApiClient {
    pub fn new(http_client: reqwest::Client, base_url: String, bot_token: Option<String>) -> Self {
        Self {
            http_client,
            base_url,
            bot_token,
        }
    }

    /// Fetches the roles of a guild from Discord.
    ///
    /// # Arguments
    /// - `discord_guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Vec<DiscordRole>)` - Roles in Discord's order
    /// - `Err(AppError::InternalErr)` - No bot token configured or Discord answered
    ///   with a non-success status
    /// - `Err(AppError::ReqwestErr)` - Request or body decoding failed
    pub async fn get_guild_roles(&self, discord_guild_id: &str) -> Result<Vec<DiscordRole>, AppError> {
        let bot_token = self
            .bot_token
            .as_deref()
            .ok_or(InternalError::DiscordNotConfigured)?;

        let path = format!("/guilds/{}/roles", discord_guild_id);
        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .header("Authorization", format!("Bot {}", bot_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InternalError::DiscordApi {
                path,
                status: status.as_u16(),
            }
            .into());
        }

        Ok(response.json::<Vec<DiscordRole>>().await?)
    }
}

/// Filters roles down to those that can be assigned permissions.
///
/// Drops integration-managed roles and `@everyone`, whose ID equals the guild ID, then
/// orders by position, highest first.
pub fn visible_roles(roles: Vec<DiscordRole>, discord_guild_id: &str) -> Vec<GuildRoleDto> {
    let mut roles: Vec<DiscordRole> = roles
        .into_iter()
        .filter(|role| !role.managed && role.name != "@everyone" && role.id != discord_guild_id)
        .collect();
    roles.sort_by(|a, b| b.position.cmp(&a.position));

    roles
        .into_iter()
        .map(|role| GuildRoleDto {
            color_hex: format!("#{:06x}", role.color),
            id: role.id,
            name: role.name,
            color: role.color,
            position: role.position,
        })
        .collect()
}
