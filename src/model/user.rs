use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Full user profile as stored by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
    pub discord_id: String,
    pub global_tracking_disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a user may change on their own profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserProfileDto {
    pub global_tracking_disabled: Option<bool>,
}

/// Condensed profile embedded in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionUserDto {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
    pub discord_id: String,
    pub global_tracking_disabled: bool,
}
