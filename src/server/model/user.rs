//! User profile domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::{
        auth::SessionDto,
        user::{SessionUserDto, UpdateUserProfileDto, UserProfileDto},
    },
    server::model::guild::GuildSelection,
};

/// Local profile bridged from an identity provider login or a bot registration.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    /// Identity provider subject; `None` until the user signs in to the dashboard.
    pub auth_user_id: Option<String>,
    pub discord_id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub global_tracking_disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Converts an entity model to a user profile at the repository boundary.
    pub fn from_entity(entity: entity::user_profile::Model) -> Self {
        Self {
            id: entity.id,
            auth_user_id: entity.auth_user_id,
            discord_id: entity.discord_id,
            username: entity.username,
            avatar_url: entity.avatar_url,
            global_tracking_disabled: entity.global_tracking_disabled,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            id: self.id,
            username: self.username,
            avatar_url: self.avatar_url,
            discord_id: self.discord_id,
            global_tracking_disabled: self.global_tracking_disabled,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Whether the profile already carries the subject and display details of `link`.
    pub fn has_identity(&self, link: &LinkIdentityParam) -> bool {
        self.auth_user_id.as_deref() == Some(link.auth_user_id.as_str())
            && self.username == link.username
            && self.avatar_url == link.avatar_url
    }

    pub fn to_session_dto(&self) -> SessionUserDto {
        SessionUserDto {
            id: self.id,
            username: self.username.clone(),
            avatar_url: self.avatar_url.clone(),
            discord_id: self.discord_id.clone(),
            global_tracking_disabled: self.global_tracking_disabled,
        }
    }
}

/// Parameters for inserting a new profile.
#[derive(Debug, Clone)]
pub struct CreateUserProfileParam {
    pub auth_user_id: Option<String>,
    pub discord_id: String,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// Identity details taken from provider claims; written only when they changed.
#[derive(Debug, Clone)]
pub struct LinkIdentityParam {
    pub auth_user_id: String,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// User-editable profile settings; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserProfileParam {
    pub global_tracking_disabled: Option<bool>,
}

impl From<UpdateUserProfileDto> for UpdateUserProfileParam {
    fn from(dto: UpdateUserProfileDto) -> Self {
        Self {
            global_tracking_disabled: dto.global_tracking_disabled,
        }
    }
}

/// Result of exchanging a bearer token at the session bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: UserProfile,
    /// Guilds the user belongs to where the bot is present.
    pub available_guilds: Vec<GuildSelection>,
    /// Service-issued token, present only when token reissue is configured.
    pub token: Option<String>,
}

impl Session {
    pub fn into_dto(self) -> SessionDto {
        SessionDto {
            user: self.user.to_session_dto(),
            available_guilds: self
                .available_guilds
                .into_iter()
                .map(GuildSelection::into_dto)
                .collect(),
            token: self.token,
        }
    }
}
