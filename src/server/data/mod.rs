//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.

pub mod guild;
pub mod guild_member;
pub mod permission;
pub mod user_profile;

pub use guild::GuildRepository;
pub use guild_member::GuildMemberRepository;
pub use permission::PermissionRepository;
pub use user_profile::UserProfileRepository;
