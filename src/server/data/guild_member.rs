//! Guild membership data repository.

use chrono::Utc;
use entity::guild_member::DiscordRoles;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::guild::{Guild, GuildMember, UpsertGuildMemberParam};

pub struct GuildMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a membership or replaces the roles of an existing one.
    ///
    /// # Arguments
    /// - `param` - Guild, user and the member's current Discord roles
    ///
    /// # Returns
    /// - `Ok((GuildMember, true))` - A new membership was created
    /// - `Ok((GuildMember, false))` - An existing membership was updated
    /// - `Err(DbErr)` - Database error, including a missing guild or user
    pub async fn upsert(
        &self,
        param: UpsertGuildMemberParam,
    ) -> Result<(GuildMember, bool), DbErr> {
        let now = Utc::now();
        let existing = self.find_entity(param.guild_id, param.user_id).await?;

        match existing {
            Some(existing) => {
                let mut active: entity::guild_member::ActiveModel = existing.into();
                active.discord_roles = ActiveValue::Set(DiscordRoles(param.discord_roles));
                active.updated_at = ActiveValue::Set(now);

                let updated = active.update(self.db).await?;
                Ok((GuildMember::from_entity(updated), false))
            }
            None => {
                let created = entity::guild_member::ActiveModel {
                    id: ActiveValue::Set(Uuid::new_v4()),
                    guild_id: ActiveValue::Set(param.guild_id),
                    user_id: ActiveValue::Set(param.user_id),
                    discord_roles: ActiveValue::Set(DiscordRoles(param.discord_roles)),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                }
                .insert(self.db)
                .await?;
                Ok((GuildMember::from_entity(created), true))
            }
        }
    }

    /// Finds the membership of a user in a guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildMember))` - The user is a member
    /// - `Ok(None)` - No membership exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, guild_id: Uuid, user_id: Uuid) -> Result<Option<GuildMember>, DbErr> {
        Ok(self
            .find_entity(guild_id, user_id)
            .await?
            .map(GuildMember::from_entity))
    }

    /// Gets every membership of a user along with its guild, ordered by guild name.
    pub async fn get_memberships_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(GuildMember, Guild)>, DbErr> {
        let rows = entity::prelude::GuildMember::find()
            .filter(entity::guild_member::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Guild)
            .order_by_asc(entity::guild::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(member, guild)| {
                guild.map(|g| (GuildMember::from_entity(member), Guild::from_entity(g)))
            })
            .collect())
    }

    /// Deletes the membership of a user in a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - A membership was deleted
    /// - `Ok(false)` - No membership existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, guild_id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildMember::delete_many()
            .filter(entity::guild_member::Column::GuildId.eq(guild_id))
            .filter(entity::guild_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_entity(
        &self,
        guild_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<entity::guild_member::Model>, DbErr> {
        entity::prelude::GuildMember::find()
            .filter(entity::guild_member::Column::GuildId.eq(guild_id))
            .filter(entity::guild_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }
}
