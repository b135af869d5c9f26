use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterGuildDto {
    pub discord_id: String,
    pub name: String,
    pub icon_url: Option<String>,
    /// Discord user ID of the guild owner.
    pub owner_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterGuildMemberDto {
    /// Internal guild ID returned by guild registration.
    pub guild_id: Uuid,
    pub discord_id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub discord_roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBotStatusDto {
    pub guild_id: Uuid,
    pub is_present: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RemoveGuildMemberDto {
    pub guild_id: Uuid,
    pub discord_id: String,
}

/// Result of an idempotent registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResultDto {
    pub id: Uuid,
    #[serde(rename = "isNew")]
    pub is_new: bool,
}
