use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Permission catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDto {
    pub id: i32,
    pub permission_key: String,
    pub description: Option<String>,
    pub module: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignPermissionToDiscordRoleDto {
    pub discord_role_id: String,
    pub permission_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignPermissionToUserDto {
    /// Internal user profile ID.
    pub user_id: Uuid,
    pub permission_key: String,
}

/// Permission keys granted to one Discord role within a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuildDiscordRolePermissionAssignmentDto {
    pub discord_role_id: String,
    pub assigned_permission_keys: Vec<String>,
}

/// Permission keys granted directly to one user within a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuildUserPermissionAssignmentDto {
    pub user_id: Uuid,
    pub username: String,
    pub assigned_permission_keys: Vec<String>,
}

/// The caller's derived access within a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EffectivePermissionsDto {
    pub is_admin: bool,
    pub permissions: Vec<String>,
}
