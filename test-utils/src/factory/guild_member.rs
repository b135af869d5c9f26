//! Guild member factory for creating membership entities.

use chrono::Utc;
use entity::guild_member::DiscordRoles;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating guild memberships.
///
/// Requires the guild and user profile to already exist.
pub struct GuildMemberFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: Uuid,
    user_id: Uuid,
    discord_roles: Vec<String>,
}

impl<'a> GuildMemberFactory<'a> {
    /// Creates a new GuildMemberFactory for the given guild and user with no roles.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Internal guild ID
    /// - `user_id` - Internal user profile ID
    pub fn new(db: &'a DatabaseConnection, guild_id: Uuid, user_id: Uuid) -> Self {
        Self {
            db,
            guild_id,
            user_id,
            discord_roles: Vec::new(),
        }
    }

    /// Sets the member's Discord role strings.
    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.discord_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Builds and inserts the membership into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_member::Model)` - Created membership
    /// - `Err(DbErr)` - Database error during insert (including missing guild/user)
    pub async fn build(self) -> Result<entity::guild_member::Model, DbErr> {
        let now = Utc::now();
        entity::guild_member::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            discord_roles: ActiveValue::Set(DiscordRoles(self.discord_roles)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a membership without roles.
///
/// Shorthand for `GuildMemberFactory::new(db, guild_id, user_id).build().await`.
pub async fn create_guild_member(
    db: &DatabaseConnection,
    guild_id: Uuid,
    user_id: Uuid,
) -> Result<entity::guild_member::Model, DbErr> {
    GuildMemberFactory::new(db, guild_id, user_id).build().await
}
