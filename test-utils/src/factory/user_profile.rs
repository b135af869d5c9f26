//! User profile factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test user profiles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_profile::UserProfileFactory;
///
/// let user = UserProfileFactory::new(&db)
///     .discord_id("123456789")
///     .auth_user_id("supabase-subject")
///     .build()
///     .await?;
/// ```
pub struct UserProfileFactory<'a> {
    db: &'a DatabaseConnection,
    auth_user_id: Option<String>,
    discord_id: String,
    username: String,
    avatar_url: Option<String>,
    global_tracking_disabled: bool,
}

impl<'a> UserProfileFactory<'a> {
    /// Creates a new UserProfileFactory with default values.
    ///
    /// Defaults:
    /// - auth_user_id: `None`
    /// - discord_id: `"{id}"` where id is auto-incremented
    /// - username: `"User {id}"`
    /// - avatar_url: `None`
    /// - global_tracking_disabled: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserProfileFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            auth_user_id: None,
            discord_id: id.to_string(),
            username: format!("User {}", id),
            avatar_url: None,
            global_tracking_disabled: false,
        }
    }

    /// Links the profile to an identity provider subject.
    pub fn auth_user_id(mut self, auth_user_id: impl Into<String>) -> Self {
        self.auth_user_id = Some(auth_user_id.into());
        self
    }

    /// Sets the Discord ID for the user.
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the display name for the user.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the avatar URL for the user.
    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Sets the global tracking opt-out flag.
    pub fn global_tracking_disabled(mut self, disabled: bool) -> Self {
        self.global_tracking_disabled = disabled;
        self
    }

    /// Builds and inserts the user profile into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_profile::Model)` - Created user profile
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_profile::Model, DbErr> {
        let now = Utc::now();
        entity::user_profile::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            auth_user_id: ActiveValue::Set(self.auth_user_id),
            discord_id: ActiveValue::Set(self.discord_id),
            username: ActiveValue::Set(self.username),
            avatar_url: ActiveValue::Set(self.avatar_url),
            global_tracking_disabled: ActiveValue::Set(self.global_tracking_disabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user profile with default values.
///
/// Shorthand for `UserProfileFactory::new(db).build().await`.
pub async fn create_user_profile(
    db: &DatabaseConnection,
) -> Result<entity::user_profile::Model, DbErr> {
    UserProfileFactory::new(db).build().await
}
