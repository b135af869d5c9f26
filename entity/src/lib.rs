//! SeaORM entity definitions for the guildboard schema.
//!
//! Each module mirrors one table created by the `migration` crate.

pub mod prelude;

pub mod guild;
pub mod guild_member;
pub mod guild_role_permission;
pub mod guild_user_permission;
pub mod permission;
pub mod user_profile;
