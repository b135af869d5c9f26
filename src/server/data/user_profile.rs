//! User profile data repository for database operations.
//!
//! Provides the `UserProfileRepository` for creating profiles, looking them up by the
//! identifiers the session bridge and bot gateway know about, and updating identity
//! details and user settings.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::user::{
    CreateUserProfileParam, LinkIdentityParam, UpdateUserProfileParam, UserProfile,
};

/// Repository providing database operations for user profiles.
pub struct UserProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserProfileRepository<'a> {
    /// Creates a new UserProfileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserProfileRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new profile with tracking enabled.
    ///
    /// # Arguments
    /// - `param` - Identity details for the new profile
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The created profile
    /// - `Err(DbErr)` - Database error, including a unique violation on `discord_id`
    ///   or `auth_user_id`
    pub async fn create(&self, param: CreateUserProfileParam) -> Result<UserProfile, DbErr> {
        let now = Utc::now();
        let entity = entity::user_profile::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            auth_user_id: ActiveValue::Set(param.auth_user_id),
            discord_id: ActiveValue::Set(param.discord_id),
            username: ActiveValue::Set(param.username),
            avatar_url: ActiveValue::Set(param.avatar_url),
            global_tracking_disabled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(UserProfile::from_entity(entity))
    }

    /// Finds a profile by its internal ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - Profile found
    /// - `Ok(None)` - No profile with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, DbErr> {
        let entity = entity::prelude::UserProfile::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(UserProfile::from_entity))
    }

    /// Finds a profile linked to an identity provider subject.
    pub async fn find_by_auth_user_id(
        &self,
        auth_user_id: &str,
    ) -> Result<Option<UserProfile>, DbErr> {
        let entity = entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::AuthUserId.eq(auth_user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(UserProfile::from_entity))
    }

    /// Finds a profile by Discord user ID.
    pub async fn find_by_discord_id(&self, discord_id: &str) -> Result<Option<UserProfile>, DbErr> {
        let entity = entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::DiscordId.eq(discord_id))
            .one(self.db)
            .await?;

        Ok(entity.map(UserProfile::from_entity))
    }

    /// Links a profile to a provider subject and refreshes its display details.
    ///
    /// # Arguments
    /// - `id` - Internal ID of the profile to update
    /// - `param` - Subject, username and avatar from the verified token
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - The updated profile
    /// - `Ok(None)` - No profile with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn link_identity(
        &self,
        id: Uuid,
        param: LinkIdentityParam,
    ) -> Result<Option<UserProfile>, DbErr> {
        let Some(existing) = entity::prelude::UserProfile::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user_profile::ActiveModel = existing.into();
        active.auth_user_id = ActiveValue::Set(Some(param.auth_user_id));
        active.username = ActiveValue::Set(param.username);
        active.avatar_url = ActiveValue::Set(param.avatar_url);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(UserProfile::from_entity(updated)))
    }

    /// Refreshes the username and avatar of a profile known by Discord ID.
    ///
    /// Used by the bot gateway, which reports Discord identity but no provider subject.
    pub async fn refresh_discord_details(
        &self,
        id: Uuid,
        username: String,
        avatar_url: Option<String>,
    ) -> Result<Option<UserProfile>, DbErr> {
        let Some(existing) = entity::prelude::UserProfile::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user_profile::ActiveModel = existing.into();
        active.username = ActiveValue::Set(username);
        active.avatar_url = ActiveValue::Set(avatar_url);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(UserProfile::from_entity(updated)))
    }

    /// Applies user-editable settings, bumping `updated_at`.
    ///
    /// Fields set to `None` in `param` are left unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - The updated profile
    /// - `Ok(None)` - No profile with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_settings(
        &self,
        id: Uuid,
        param: UpdateUserProfileParam,
    ) -> Result<Option<UserProfile>, DbErr> {
        let Some(existing) = entity::prelude::UserProfile::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user_profile::ActiveModel = existing.into();
        if let Some(disabled) = param.global_tracking_disabled {
            active.global_tracking_disabled = ActiveValue::Set(disabled);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(UserProfile::from_entity(updated)))
    }
}
