//! Permission factory for creating catalog entries and grants.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Inserts a permission key into the catalog.
///
/// # Arguments
/// - `db` - Database connection
/// - `permission_key` - Key such as `category:create`
///
/// # Returns
/// - `Ok(entity::permission::Model)` - Created catalog entry
/// - `Err(DbErr)` - Database error during insert (including duplicate key)
pub async fn create_permission(
    db: &DatabaseConnection,
    permission_key: &str,
) -> Result<entity::permission::Model, DbErr> {
    let module = permission_key.split(':').next().map(str::to_string);

    entity::permission::ActiveModel {
        permission_key: ActiveValue::Set(permission_key.to_string()),
        description: ActiveValue::Set(Some(format!("Test permission {}", permission_key))),
        module: ActiveValue::Set(module),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Grants a permission to a Discord role within a guild.
pub async fn grant_role_permission(
    db: &DatabaseConnection,
    guild_id: Uuid,
    discord_role_id: &str,
    permission_id: i32,
) -> Result<entity::guild_role_permission::Model, DbErr> {
    entity::guild_role_permission::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        discord_role_id: ActiveValue::Set(discord_role_id.to_string()),
        permission_id: ActiveValue::Set(permission_id),
        assigned_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Grants a permission directly to a user profile within a guild.
pub async fn grant_user_permission(
    db: &DatabaseConnection,
    guild_id: Uuid,
    user_profile_id: Uuid,
    permission_id: i32,
) -> Result<entity::guild_user_permission::Model, DbErr> {
    entity::guild_user_permission::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        user_profile_id: ActiveValue::Set(user_profile_id),
        permission_id: ActiveValue::Set(permission_id),
        assigned_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
