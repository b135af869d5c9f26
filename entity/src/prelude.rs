pub use super::guild::Entity as Guild;
pub use super::guild_member::Entity as GuildMember;
pub use super::guild_role_permission::Entity as GuildRolePermission;
pub use super::guild_user_permission::Entity as GuildUserPermission;
pub use super::permission::Entity as Permission;
pub use super::user_profile::Entity as UserProfile;
