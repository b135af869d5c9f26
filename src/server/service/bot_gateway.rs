//! Writes reported by the Discord bot.
//!
//! The bot is the only writer of guilds and memberships. Every operation is idempotent
//! so the bot can replay events after reconnecting.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{GuildMemberRepository, GuildRepository, UserProfileRepository},
    error::AppError,
    model::{
        guild::{
            Guild, RegisterGuildMemberParam, Registration, UpsertGuildMemberParam,
            UpsertGuildParam,
        },
        user::{CreateUserProfileParam, UserProfile},
    },
    util::validate::{require_non_empty, require_snowflake},
};

pub struct BotGatewayService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BotGatewayService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a guild or refreshes its details, marking the bot present.
    ///
    /// # Arguments
    /// - `param` - Guild details reported by the bot
    ///
    /// # Returns
    /// - `Ok(Registration)` - Internal guild ID and whether it was newly created
    /// - `Err(AppError::BadRequest)` - Malformed Discord IDs or a blank name
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn register_guild(&self, param: UpsertGuildParam) -> Result<Registration, AppError> {
        require_snowflake("discord_id", &param.discord_id)?;
        require_snowflake("owner_id", &param.owner_id)?;
        require_non_empty("name", &param.name)?;

        let (guild, is_new) = GuildRepository::new(self.db).upsert(param).await?;

        if is_new {
            tracing::info!("Registered guild {} ({})", guild.name, guild.discord_id);
        }

        Ok(Registration {
            id: guild.id,
            is_new,
        })
    }

    /// Registers a guild member, creating the user profile when unknown.
    ///
    /// Profiles created here have no provider subject until the user first signs in to
    /// the dashboard. Existing profiles get their username and avatar refreshed and the
    /// membership's roles are replaced with the reported ones.
    ///
    /// # Arguments
    /// - `param` - Guild ID and the member's Discord details
    ///
    /// # Returns
    /// - `Ok(Registration)` - Membership ID and whether it was newly created
    /// - `Err(AppError::BadRequest)` - Malformed Discord ID or a blank username
    /// - `Err(AppError::NotFound)` - Guild does not exist
    /// - `Err(AppError::DbErr)` - Database error during writes
    pub async fn register_guild_member(
        &self,
        param: RegisterGuildMemberParam,
    ) -> Result<Registration, AppError> {
        require_snowflake("discord_id", &param.discord_id)?;
        require_non_empty("username", &param.username)?;
        self.require_guild(param.guild_id).await?;

        let user = self.find_or_create_user(&param).await?;

        let (member, is_new) = GuildMemberRepository::new(self.db)
            .upsert(UpsertGuildMemberParam {
                guild_id: param.guild_id,
                user_id: user.id,
                discord_roles: param.discord_roles,
            })
            .await?;

        Ok(Registration {
            id: member.id,
            is_new,
        })
    }

    /// Records whether the bot is present in a guild.
    ///
    /// # Returns
    /// - `Ok(Guild)` - The updated guild
    /// - `Err(AppError::NotFound)` - Guild does not exist
    pub async fn update_bot_status(&self, guild_id: Uuid, is_present: bool) -> Result<Guild, AppError> {
        let guild = GuildRepository::new(self.db)
            .set_bot_present(guild_id, is_present)
            .await?
            .ok_or_else(|| AppError::NotFound("Guild not found".to_string()))?;

        tracing::info!("Bot presence in guild {} set to {}", guild.discord_id, is_present);

        Ok(guild)
    }

    /// Removes a member from a guild; unknown users or memberships are a no-op.
    ///
    /// # Returns
    /// - `Ok(true)` - A membership was removed
    /// - `Ok(false)` - Nothing to remove
    /// - `Err(AppError::BadRequest)` - Malformed Discord ID
    pub async fn remove_guild_member(
        &self,
        guild_id: Uuid,
        discord_id: &str,
    ) -> Result<bool, AppError> {
        require_snowflake("discord_id", discord_id)?;

        let Some(user) = UserProfileRepository::new(self.db)
            .find_by_discord_id(discord_id)
            .await?
        else {
            return Ok(false);
        };

        Ok(GuildMemberRepository::new(self.db)
            .delete(guild_id, user.id)
            .await?)
    }

    async fn require_guild(&self, guild_id: Uuid) -> Result<Guild, AppError> {
        GuildRepository::new(self.db)
            .find_by_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guild not found".to_string()))
    }

    async fn find_or_create_user(
        &self,
        param: &RegisterGuildMemberParam,
    ) -> Result<UserProfile, AppError> {
        let repo = UserProfileRepository::new(self.db);

        match repo.find_by_discord_id(&param.discord_id).await? {
            Some(user) => {
                let refreshed = repo
                    .refresh_discord_details(user.id, param.username.clone(), param.avatar_url.clone())
                    .await?;
                Ok(refreshed.unwrap_or(user))
            }
            None => {
                let created = repo
                    .create(CreateUserProfileParam {
                        auth_user_id: None,
                        discord_id: param.discord_id.clone(),
                        username: param.username.clone(),
                        avatar_url: param.avatar_url.clone(),
                    })
                    .await;

                match created {
                    Ok(user) => Ok(user),
                    // A sign-in for the same Discord user may have inserted first.
                    Err(err) => repo
                        .find_by_discord_id(&param.discord_id)
                        .await?
                        .ok_or_else(|| err.into()),
                }
            }
        }
    }
}
