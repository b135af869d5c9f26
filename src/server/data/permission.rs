//! Permission catalog and grant repository.
//!
//! Grants are stored per guild, either against a Discord role string or directly
//! against a user profile. Effective permissions are computed by the access control
//! service from the two lookups provided here.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::permission::{
    Permission, RolePermissionAssignment, UserPermissionAssignment,
};

pub struct PermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the full permission catalog ordered by module and key.
    pub async fn get_all(&self) -> Result<Vec<Permission>, DbErr> {
        let entities = entity::prelude::Permission::find()
            .order_by_asc(entity::permission::Column::Module)
            .order_by_asc(entity::permission::Column::PermissionKey)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Permission::from_entity).collect())
    }

    /// Finds a catalog entry by key.
    ///
    /// # Returns
    /// - `Ok(Some(Permission))` - Key exists
    /// - `Ok(None)` - Unknown key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_key(&self, permission_key: &str) -> Result<Option<Permission>, DbErr> {
        let entity = entity::prelude::Permission::find()
            .filter(entity::permission::Column::PermissionKey.eq(permission_key))
            .one(self.db)
            .await?;

        Ok(entity.map(Permission::from_entity))
    }

    /// Gets the keys granted directly to a user within a guild.
    pub async fn get_user_permission_keys(
        &self,
        guild_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<String>, DbErr> {
        let rows = entity::prelude::GuildUserPermission::find()
            .filter(entity::guild_user_permission::Column::GuildId.eq(guild_id))
            .filter(entity::guild_user_permission::Column::UserProfileId.eq(user_id))
            .find_also_related(entity::prelude::Permission)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, permission)| permission.map(|p| p.permission_key))
            .collect())
    }

    /// Gets the keys granted to any of the given role strings within a guild.
    ///
    /// Returns an empty list without querying when `roles` is empty.
    pub async fn get_role_permission_keys(
        &self,
        guild_id: Uuid,
        roles: &[String],
    ) -> Result<Vec<String>, DbErr> {
        if roles.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::GuildRolePermission::find()
            .filter(entity::guild_role_permission::Column::GuildId.eq(guild_id))
            .filter(entity::guild_role_permission::Column::DiscordRoleId.is_in(roles.iter().cloned()))
            .find_also_related(entity::prelude::Permission)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, permission)| permission.map(|p| p.permission_key))
            .collect())
    }

    /// Grants a permission to a Discord role within a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - The grant was created
    /// - `Ok(false)` - The role already held the grant
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn assign_to_role(
        &self,
        guild_id: Uuid,
        discord_role_id: &str,
        permission_id: i32,
    ) -> Result<bool, DbErr> {
        let existing = entity::prelude::GuildRolePermission::find_by_id((
            guild_id,
            discord_role_id.to_string(),
            permission_id,
        ))
        .one(self.db)
        .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::guild_role_permission::ActiveModel {
            guild_id: ActiveValue::Set(guild_id),
            discord_role_id: ActiveValue::Set(discord_role_id.to_string()),
            permission_id: ActiveValue::Set(permission_id),
            assigned_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes a role grant.
    ///
    /// # Returns
    /// - `Ok(true)` - The grant was removed
    /// - `Ok(false)` - No such grant existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn revoke_from_role(
        &self,
        guild_id: Uuid,
        discord_role_id: &str,
        permission_id: i32,
    ) -> Result<bool, DbErr> {
        let existing = entity::prelude::GuildRolePermission::find_by_id((
            guild_id,
            discord_role_id.to_string(),
            permission_id,
        ))
        .one(self.db)
        .await?;

        match existing {
            Some(model) => {
                model.delete(self.db).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Grants a permission directly to a user within a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - The grant was created
    /// - `Ok(false)` - The user already held the grant
    /// - `Err(DbErr)` - Database error, including a missing user profile
    pub async fn assign_to_user(
        &self,
        guild_id: Uuid,
        user_id: Uuid,
        permission_id: i32,
    ) -> Result<bool, DbErr> {
        let existing =
            entity::prelude::GuildUserPermission::find_by_id((guild_id, user_id, permission_id))
                .one(self.db)
                .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::guild_user_permission::ActiveModel {
            guild_id: ActiveValue::Set(guild_id),
            user_profile_id: ActiveValue::Set(user_id),
            permission_id: ActiveValue::Set(permission_id),
            assigned_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes a direct user grant.
    pub async fn revoke_from_user(
        &self,
        guild_id: Uuid,
        user_id: Uuid,
        permission_id: i32,
    ) -> Result<bool, DbErr> {
        let existing =
            entity::prelude::GuildUserPermission::find_by_id((guild_id, user_id, permission_id))
                .one(self.db)
                .await?;

        match existing {
            Some(model) => {
                model.delete(self.db).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Lists role grants in a guild grouped by role, roles and keys sorted.
    pub async fn get_role_assignments(
        &self,
        guild_id: Uuid,
    ) -> Result<Vec<RolePermissionAssignment>, DbErr> {
        let rows = entity::prelude::GuildRolePermission::find()
            .filter(entity::guild_role_permission::Column::GuildId.eq(guild_id))
            .find_also_related(entity::prelude::Permission)
            .all(self.db)
            .await?;

        let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (grant, permission) in rows {
            if let Some(permission) = permission {
                grouped
                    .entry(grant.discord_role_id)
                    .or_default()
                    .insert(permission.permission_key);
            }
        }

        Ok(grouped
            .into_iter()
            .map(|(discord_role_id, keys)| RolePermissionAssignment {
                discord_role_id,
                permission_keys: keys.into_iter().collect(),
            })
            .collect())
    }

    /// Lists direct user grants in a guild grouped by user, ordered by username.
    pub async fn get_user_assignments(
        &self,
        guild_id: Uuid,
    ) -> Result<Vec<UserPermissionAssignment>, DbErr> {
        let rows = entity::prelude::GuildUserPermission::find()
            .filter(entity::guild_user_permission::Column::GuildId.eq(guild_id))
            .find_also_related(entity::prelude::Permission)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<Uuid, BTreeSet<String>> = HashMap::new();
        for (grant, permission) in rows {
            if let Some(permission) = permission {
                grouped
                    .entry(grant.user_profile_id)
                    .or_default()
                    .insert(permission.permission_key);
            }
        }

        if grouped.is_empty() {
            return Ok(Vec::new());
        }

        let users = entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::Id.is_in(grouped.keys().copied()))
            .order_by_asc(entity::user_profile::Column::Username)
            .all(self.db)
            .await?;

        Ok(users
            .into_iter()
            .filter_map(|user| {
                grouped
                    .remove(&user.id)
                    .map(|keys| UserPermissionAssignment {
                        user_id: user.id,
                        username: user.username,
                        permission_keys: keys.into_iter().collect(),
                    })
            })
            .collect())
    }
}
