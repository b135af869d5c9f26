//! Guild factory for creating test guild entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test guilds with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild::GuildFactory;
///
/// let guild = GuildFactory::new(&db)
///     .discord_id("987654321")
///     .owner_id("123456789")
///     .build()
///     .await?;
/// ```
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    name: String,
    icon_url: Option<String>,
    owner_id: String,
    bot_present: bool,
}

impl<'a> GuildFactory<'a> {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: `"{id}"` where id is auto-incremented
    /// - name: `"Guild {id}"`
    /// - icon_url: `None`
    /// - owner_id: `"owner_{id}"` (matches no factory-created user)
    /// - bot_present: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GuildFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            name: format!("Guild {}", id),
            icon_url: None,
            owner_id: format!("owner_{}", id),
            bot_present: true,
        }
    }

    /// Sets the Discord guild ID.
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the guild name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the guild icon URL.
    pub fn icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    /// Sets the Discord user ID of the guild owner.
    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    /// Sets whether the bot is present in the guild.
    pub fn bot_present(mut self, bot_present: bool) -> Self {
        self.bot_present = bot_present;
        self
    }

    /// Builds and inserts the guild into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild::Model)` - Created guild
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        let now = Utc::now();
        entity::guild::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
            icon_url: ActiveValue::Set(self.icon_url),
            owner_id: ActiveValue::Set(self.owner_id),
            bot_present: ActiveValue::Set(self.bot_present),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild with default values.
///
/// Shorthand for `GuildFactory::new(db).build().await`.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).build().await
}
