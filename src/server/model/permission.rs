//! Permission catalog and assignment models.

use uuid::Uuid;

use crate::model::permission::{
    GuildDiscordRolePermissionAssignmentDto, GuildUserPermissionAssignmentDto, PermissionDto,
};

/// Key required to list permission assignments in a guild.
pub const READ_PERMISSIONS: &str = "admin:read:permissions";
/// Key required to assign or revoke permissions in a guild.
pub const ASSIGN_PERMISSIONS: &str = "admin:assign:permissions";

#[derive(Debug, Clone, PartialEq)]
pub struct Permission {
    pub id: i32,
    pub permission_key: String,
    pub description: Option<String>,
    pub module: Option<String>,
}

impl Permission {
    pub fn from_entity(entity: entity::permission::Model) -> Self {
        Self {
            id: entity.id,
            permission_key: entity.permission_key,
            description: entity.description,
            module: entity.module,
        }
    }

    pub fn into_dto(self) -> PermissionDto {
        PermissionDto {
            id: self.id,
            permission_key: self.permission_key,
            description: self.description,
            module: self.module,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RolePermissionAssignment {
    pub discord_role_id: String,
    pub permission_keys: Vec<String>,
}

impl RolePermissionAssignment {
    pub fn into_dto(self) -> GuildDiscordRolePermissionAssignmentDto {
        GuildDiscordRolePermissionAssignmentDto {
            discord_role_id: self.discord_role_id,
            assigned_permission_keys: self.permission_keys,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserPermissionAssignment {
    pub user_id: Uuid,
    pub username: String,
    pub permission_keys: Vec<String>,
}

impl UserPermissionAssignment {
    pub fn into_dto(self) -> GuildUserPermissionAssignmentDto {
        GuildUserPermissionAssignmentDto {
            user_id: self.user_id,
            username: self.username,
            assigned_permission_keys: self.permission_keys,
        }
    }
}
