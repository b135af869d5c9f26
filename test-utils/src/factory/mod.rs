//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user_profile::create_user_profile(&db).await?;
//!     let guild = factory::guild::create_guild(&db).await?;
//!
//!     let (user, guild, member) = factory::helpers::create_member_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let guild = factory::guild::GuildFactory::new(&db)
//!     .owner_id(&user.discord_id)
//!     .bot_present(false)
//!     .build()
//!     .await?;
//!
//! let member = factory::guild_member::GuildMemberFactory::new(&db, guild.id, user.id)
//!     .roles(["Moderator", "Server Admin"])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user_profile` - Create user profile entities
//! - `guild` - Create guild entities
//! - `guild_member` - Create guild membership entities
//! - `permission` - Create permission catalog entries and grants
//! - `helpers` - ID generation and dependency helpers

pub mod guild;
pub mod guild_member;
pub mod helpers;
pub mod permission;
pub mod user_profile;

pub use guild::create_guild;
pub use guild_member::create_guild_member;
pub use permission::{create_permission, grant_role_permission, grant_user_permission};
pub use user_profile::create_user_profile;
