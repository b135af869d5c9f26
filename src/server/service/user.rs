//! User profile queries and settings.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::UserProfileRepository,
    error::AppError,
    model::user::{UpdateUserProfileParam, UserProfile},
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a profile by internal ID.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - Profile found
    /// - `Err(AppError::NotFound)` - No profile with that ID
    pub async fn get_by_id(&self, user_id: Uuid) -> Result<UserProfile, AppError> {
        UserProfileRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies user-editable settings to a profile.
    ///
    /// # Arguments
    /// - `user_id` - Internal ID of the profile
    /// - `param` - Settings to change; `None` fields are left unchanged
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The updated profile
    /// - `Err(AppError::NotFound)` - No profile with that ID
    pub async fn update_settings(
        &self,
        user_id: Uuid,
        param: UpdateUserProfileParam,
    ) -> Result<UserProfile, AppError> {
        UserProfileRepository::new(self.db)
            .update_settings(user_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
