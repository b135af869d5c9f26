//! Guild data repository.
//!
//! Guild rows are written by the bot gateway and read by the dashboard endpoints.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::guild::{Guild, UpsertGuildParam};

pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a guild or refreshes an existing one, marking the bot present.
    ///
    /// Matches on the Discord guild ID. Name, icon and owner are overwritten with the
    /// values in `param`.
    ///
    /// # Arguments
    /// - `param` - Guild details reported by the bot
    ///
    /// # Returns
    /// - `Ok((Guild, true))` - A new guild row was created
    /// - `Ok((Guild, false))` - An existing guild row was updated
    /// - `Err(DbErr)` - Database error during lookup or write
    pub async fn upsert(&self, param: UpsertGuildParam) -> Result<(Guild, bool), DbErr> {
        let now = Utc::now();
        let existing = entity::prelude::Guild::find()
            .filter(entity::guild::Column::DiscordId.eq(&param.discord_id))
            .one(self.db)
            .await?;

        match existing {
            Some(existing) => {
                let mut active: entity::guild::ActiveModel = existing.into();
                active.name = ActiveValue::Set(param.name);
                active.icon_url = ActiveValue::Set(param.icon_url);
                active.owner_id = ActiveValue::Set(param.owner_id);
                active.bot_present = ActiveValue::Set(true);
                active.updated_at = ActiveValue::Set(now);

                let updated = active.update(self.db).await?;
                Ok((Guild::from_entity(updated), false))
            }
            None => {
                let created = entity::guild::ActiveModel {
                    id: ActiveValue::Set(Uuid::new_v4()),
                    discord_id: ActiveValue::Set(param.discord_id),
                    name: ActiveValue::Set(param.name),
                    icon_url: ActiveValue::Set(param.icon_url),
                    owner_id: ActiveValue::Set(param.owner_id),
                    bot_present: ActiveValue::Set(true),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                }
                .insert(self.db)
                .await?;
                Ok((Guild::from_entity(created), true))
            }
        }
    }

    /// Finds a guild by its internal ID.
    ///
    /// # Returns
    /// - `Ok(Some(Guild))` - Guild found
    /// - `Ok(None)` - No guild with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Guild>, DbErr> {
        let entity = entity::prelude::Guild::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Guild::from_entity))
    }

    /// Records whether the bot is currently present in a guild.
    ///
    /// # Returns
    /// - `Ok(Some(Guild))` - The updated guild
    /// - `Ok(None)` - No guild with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_bot_present(&self, id: Uuid, present: bool) -> Result<Option<Guild>, DbErr> {
        let Some(existing) = entity::prelude::Guild::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::guild::ActiveModel = existing.into();
        active.bot_present = ActiveValue::Set(present);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Guild::from_entity(updated)))
    }
}
