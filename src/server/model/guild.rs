//! Guild and membership domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::{
    bot_gateway::{RegisterGuildDto, RegisterGuildMemberDto, RegistrationResultDto},
    guild::{GuildDto, GuildMemberDto, GuildSelectionInfoDto},
};

/// A Discord server registered by the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    pub id: Uuid,
    pub discord_id: String,
    pub name: String,
    pub icon_url: Option<String>,
    /// Discord user ID of the owner.
    pub owner_id: String,
    /// Whether the bot is currently in the guild.
    pub bot_present: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Guild {
    pub fn from_entity(entity: entity::guild::Model) -> Self {
        Self {
            id: entity.id,
            discord_id: entity.discord_id,
            name: entity.name,
            icon_url: entity.icon_url,
            owner_id: entity.owner_id,
            bot_present: entity.bot_present,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether the given Discord user owns this guild.
    pub fn is_owned_by(&self, discord_id: &str) -> bool {
        self.owner_id == discord_id
    }

    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            id: self.id,
            discord_id: self.discord_id,
            name: self.name,
            icon_url: self.icon_url,
            owner_id: self.owner_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Membership of a user profile in a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildMember {
    pub id: Uuid,
    pub guild_id: Uuid,
    pub user_id: Uuid,
    pub discord_roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuildMember {
    pub fn from_entity(entity: entity::guild_member::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            user_id: entity.user_id,
            discord_roles: entity.discord_roles.0,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GuildMemberDto {
        GuildMemberDto {
            id: self.id,
            guild_id: self.guild_id,
            user_id: self.user_id,
            discord_roles: self.discord_roles,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A guild reachable by a user together with the derived access flags.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSelection {
    pub guild: Guild,
    pub is_admin: bool,
    pub permissions: Vec<String>,
}

impl GuildSelection {
    pub fn into_dto(self) -> GuildSelectionInfoDto {
        GuildSelectionInfoDto {
            id: self.guild.id,
            discord_id: self.guild.discord_id,
            name: self.guild.name,
            icon_url: self.guild.icon_url,
            is_admin: self.is_admin,
            permissions: self.permissions,
        }
    }
}

/// A user's resolved standing within one guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildAccess {
    pub guild: Guild,
    /// `None` when the user has no membership row.
    pub member: Option<GuildMember>,
    pub is_owner: bool,
    pub is_admin: bool,
    /// Effective permission keys, sorted and deduplicated.
    pub permissions: Vec<String>,
}

impl GuildAccess {
    /// Members and the owner may view the guild.
    pub fn is_member(&self) -> bool {
        self.member.is_some() || self.is_owner
    }

    /// Admins implicitly hold every permission key.
    pub fn has_permission(&self, permission_key: &str) -> bool {
        self.is_admin || self.permissions.iter().any(|key| key == permission_key)
    }
}

/// Parameters for registering or refreshing a guild from the bot.
#[derive(Debug, Clone)]
pub struct UpsertGuildParam {
    pub discord_id: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub owner_id: String,
}

impl From<RegisterGuildDto> for UpsertGuildParam {
    fn from(dto: RegisterGuildDto) -> Self {
        Self {
            discord_id: dto.discord_id,
            name: dto.name,
            icon_url: dto.icon_url,
            owner_id: dto.owner_id,
        }
    }
}

/// Member details reported by the bot, keyed by Discord user ID.
#[derive(Debug, Clone)]
pub struct RegisterGuildMemberParam {
    pub guild_id: Uuid,
    pub discord_id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub discord_roles: Vec<String>,
}

impl From<RegisterGuildMemberDto> for RegisterGuildMemberParam {
    fn from(dto: RegisterGuildMemberDto) -> Self {
        Self {
            guild_id: dto.guild_id,
            discord_id: dto.discord_id,
            username: dto.username,
            avatar_url: dto.avatar_url,
            discord_roles: dto.discord_roles,
        }
    }
}

/// Outcome of an idempotent bot registration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Registration {
    pub id: Uuid,
    pub is_new: bool,
}

impl Registration {
    pub fn into_dto(self) -> RegistrationResultDto {
        RegistrationResultDto {
            id: self.id,
            is_new: self.is_new,
        }
    }
}

/// Parameters for registering or refreshing a membership from the bot.
#[derive(Debug, Clone)]
pub struct UpsertGuildMemberParam {
    pub guild_id: Uuid,
    pub user_id: Uuid,
    pub discord_roles: Vec<String>,
}
