//! Guild queries for the dashboard.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{GuildMemberRepository, GuildRepository},
    error::AppError,
    model::{
        guild::{Guild, GuildMember, GuildSelection},
        user::UserProfile,
    },
    service::access_control::AccessControlService,
    util::admin::is_admin,
};

pub struct GuildService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every guild the user is a member of, with derived access flags.
    ///
    /// # Arguments
    /// - `user` - Authenticated user profile
    ///
    /// # Returns
    /// - `Ok(Vec<GuildSelection>)` - Guilds ordered by name
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn get_user_guilds(&self, user: &UserProfile) -> Result<Vec<GuildSelection>, AppError> {
        let memberships = GuildMemberRepository::new(self.db)
            .get_memberships_for_user(user.id)
            .await?;
        let access_control = AccessControlService::new(self.db);

        let mut selections = Vec::with_capacity(memberships.len());
        for (member, guild) in memberships {
            let is_owner = guild.is_owned_by(&user.discord_id);
            let permissions = access_control
                .permissions_for(guild.id, user.id, &member.discord_roles)
                .await?;

            selections.push(GuildSelection {
                is_admin: is_admin(&member.discord_roles, is_owner),
                guild,
                permissions,
            });
        }

        Ok(selections)
    }

    /// Gets the user's guilds where the bot is currently present.
    pub async fn get_available_guilds(
        &self,
        user: &UserProfile,
    ) -> Result<Vec<GuildSelection>, AppError> {
        let guilds = self.get_user_guilds(user).await?;

        Ok(guilds
            .into_iter()
            .filter(|selection| selection.guild.bot_present)
            .collect())
    }

    /// Gets a guild by internal ID.
    ///
    /// # Returns
    /// - `Ok(Guild)` - Guild found
    /// - `Err(AppError::NotFound)` - No guild with that ID
    pub async fn get_by_id(&self, guild_id: Uuid) -> Result<Guild, AppError> {
        GuildRepository::new(self.db)
            .find_by_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guild not found".to_string()))
    }

    /// Gets a user's membership in a guild.
    ///
    /// # Returns
    /// - `Ok(GuildMember)` - Membership found
    /// - `Err(AppError::NotFound)` - The user is not a member
    pub async fn get_membership(&self, guild_id: Uuid, user_id: Uuid) -> Result<GuildMember, AppError> {
        GuildMemberRepository::new(self.db)
            .find(guild_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Membership not found".to_string()))
    }
}
