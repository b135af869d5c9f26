//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and convenience methods for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user profile, a bot-present guild and a membership linking the two.
///
/// All entities use factory defaults; the member holds no roles.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, guild, member))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user_profile::Model,
        entity::guild::Model,
        entity::guild_member::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user_profile::create_user_profile(db).await?;
    let guild = crate::factory::guild::create_guild(db).await?;
    let member = crate::factory::guild_member::create_guild_member(db, guild.id, user.id).await?;

    Ok((user, guild, member))
}
