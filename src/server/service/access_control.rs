//! Guild access control.
//!
//! Derives a user's standing in a guild from ownership, admin-marked role names and
//! explicit permission grants, and manages those grants.

use std::collections::BTreeSet;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{GuildMemberRepository, GuildRepository, PermissionRepository, UserProfileRepository},
    error::AppError,
    model::{
        guild::GuildAccess,
        permission::{Permission, RolePermissionAssignment, UserPermissionAssignment},
        user::UserProfile,
    },
    util::{admin::is_admin, validate::require_non_empty},
};

pub struct AccessControlService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AccessControlService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every permission key in the catalog.
    pub async fn get_all_permissions(&self) -> Result<Vec<Permission>, AppError> {
        Ok(PermissionRepository::new(self.db).get_all().await?)
    }

    /// Computes the effective permission keys for a member with the given roles.
    ///
    /// # Arguments
    /// - `guild_id` - Internal guild ID
    /// - `user_id` - Internal user profile ID
    /// - `roles` - The member's Discord role strings
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Union of direct and role grants, sorted and deduplicated
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn permissions_for(
        &self,
        guild_id: Uuid,
        user_id: Uuid,
        roles: &[String],
    ) -> Result<Vec<String>, AppError> {
        let repo = PermissionRepository::new(self.db);

        let mut keys: BTreeSet<String> = repo
            .get_user_permission_keys(guild_id, user_id)
            .await?
            .into_iter()
            .collect();
        keys.extend(repo.get_role_permission_keys(guild_id, roles).await?);

        Ok(keys.into_iter().collect())
    }

    /// Resolves the user's standing in a guild.
    ///
    /// A user without a membership only receives direct grants.
    ///
    /// # Arguments
    /// - `user` - Authenticated user profile
    /// - `guild_id` - Internal guild ID
    ///
    /// # Returns
    /// - `Ok(GuildAccess)` - Membership, ownership, admin flag and effective keys
    /// - `Err(AppError::NotFound)` - Guild does not exist
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn guild_access(
        &self,
        user: &UserProfile,
        guild_id: Uuid,
    ) -> Result<GuildAccess, AppError> {
        let guild = GuildRepository::new(self.db)
            .find_by_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guild not found".to_string()))?;

        let member = GuildMemberRepository::new(self.db)
            .find(guild_id, user.id)
            .await?;
        let roles = member
            .as_ref()
            .map(|m| m.discord_roles.clone())
            .unwrap_or_default();

        let is_owner = guild.is_owned_by(&user.discord_id);
        let permissions = self.permissions_for(guild_id, user.id, &roles).await?;

        Ok(GuildAccess {
            guild,
            member,
            is_owner,
            is_admin: is_admin(&roles, is_owner),
            permissions,
        })
    }

    /// Checks whether a user may perform the action guarded by `permission_key`.
    ///
    /// Guild admins pass every check.
    pub async fn can_user_perform_action(
        &self,
        user: &UserProfile,
        guild_id: Uuid,
        permission_key: &str,
    ) -> Result<bool, AppError> {
        let access = self.guild_access(user, guild_id).await?;

        Ok(access.has_permission(permission_key))
    }

    pub async fn get_role_assignments(
        &self,
        guild_id: Uuid,
    ) -> Result<Vec<RolePermissionAssignment>, AppError> {
        Ok(PermissionRepository::new(self.db)
            .get_role_assignments(guild_id)
            .await?)
    }

    pub async fn get_user_assignments(
        &self,
        guild_id: Uuid,
    ) -> Result<Vec<UserPermissionAssignment>, AppError> {
        Ok(PermissionRepository::new(self.db)
            .get_user_assignments(guild_id)
            .await?)
    }

    /// Grants a permission key to a Discord role within a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - The grant was created
    /// - `Ok(false)` - The role already held the key
    /// - `Err(AppError::BadRequest)` - Blank role or permission key
    /// - `Err(AppError::NotFound)` - Unknown permission key
    pub async fn assign_to_role(
        &self,
        guild_id: Uuid,
        discord_role_id: &str,
        permission_key: &str,
    ) -> Result<bool, AppError> {
        require_non_empty("discord_role_id", discord_role_id)?;
        let permission = self.require_permission(permission_key).await?;

        let created = PermissionRepository::new(self.db)
            .assign_to_role(guild_id, discord_role_id, permission.id)
            .await?;

        if created {
            tracing::info!(
                "Granted {} to role {} in guild {}",
                permission_key,
                discord_role_id,
                guild_id
            );
        }

        Ok(created)
    }

    /// Revokes a permission key from a Discord role; unknown keys are a no-op.
    pub async fn revoke_from_role(
        &self,
        guild_id: Uuid,
        discord_role_id: &str,
        permission_key: &str,
    ) -> Result<bool, AppError> {
        let Some(permission) = self.find_permission(permission_key).await? else {
            return Ok(false);
        };

        Ok(PermissionRepository::new(self.db)
            .revoke_from_role(guild_id, discord_role_id, permission.id)
            .await?)
    }

    /// Grants a permission key directly to a user within a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - The grant was created
    /// - `Ok(false)` - The user already held the key
    /// - `Err(AppError::BadRequest)` - Blank permission key
    /// - `Err(AppError::NotFound)` - Unknown permission key or user
    pub async fn assign_to_user(
        &self,
        guild_id: Uuid,
        user_id: Uuid,
        permission_key: &str,
    ) -> Result<bool, AppError> {
        let permission = self.require_permission(permission_key).await?;

        if UserProfileRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let created = PermissionRepository::new(self.db)
            .assign_to_user(guild_id, user_id, permission.id)
            .await?;

        if created {
            tracing::info!(
                "Granted {} to user {} in guild {}",
                permission_key,
                user_id,
                guild_id
            );
        }

        Ok(created)
    }

    /// Revokes a direct grant from a user; unknown keys are a no-op.
    pub async fn revoke_from_user(
        &self,
        guild_id: Uuid,
        user_id: Uuid,
        permission_key: &str,
    ) -> Result<bool, AppError> {
        let Some(permission) = self.find_permission(permission_key).await? else {
            return Ok(false);
        };

        Ok(PermissionRepository::new(self.db)
            .revoke_from_user(guild_id, user_id, permission.id)
            .await?)
    }

    async fn require_permission(&self, permission_key: &str) -> Result<Permission, AppError> {
        require_non_empty("permission_key", permission_key)?;

        PermissionRepository::new(self.db)
            .find_by_key(permission_key)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Permission {} not found", permission_key)))
    }

    async fn find_permission(&self, permission_key: &str) -> Result<Option<Permission>, AppError> {
        let permission = PermissionRepository::new(self.db)
            .find_by_key(permission_key)
            .await?;

        if permission.is_none() {
            tracing::warn!("Ignoring revoke of unknown permission {}", permission_key);
        }

        Ok(permission)
    }
}
