use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuildDto {
    pub id: Uuid,
    pub discord_id: String,
    pub name: String,
    pub icon_url: Option<String>,
    /// Discord user ID of the guild owner.
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuildMemberDto {
    pub id: Uuid,
    pub guild_id: Uuid,
    pub user_id: Uuid,
    pub discord_roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Guild entry shown in the dashboard's guild picker.
///
/// `is_admin` and `permissions` are derived per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuildSelectionInfoDto {
    pub id: Uuid,
    pub discord_id: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub is_admin: bool,
    pub permissions: Vec<String>,
}

/// Discord role as listed for permission assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuildRoleDto {
    pub id: String,
    pub name: String,
    pub color: u32,
    #[serde(rename = "colorHex")]
    pub color_hex: String,
    pub position: i64,
}
