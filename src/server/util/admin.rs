/// Role name fragments that mark a role as administrative.
const ADMIN_ROLE_MARKERS: [&str; 3] = ["admin", "manage", "owner"];

/// Derives whether a member administers a guild.
///
/// The guild owner is always an admin. Otherwise the member is an admin when any of
/// their role strings contains `admin`, `manage` or `owner`, compared case-insensitively.
/// This is a naming heuristic and does not inspect Discord permission bits.
///
/// # Arguments
/// - `roles` - The member's Discord role strings
/// - `is_owner` - Whether the member owns the guild
pub fn is_admin(roles: &[String], is_owner: bool) -> bool {
    if is_owner {
        return true;
    }

    roles.iter().any(|role| {
        let role = role.to_lowercase();
        ADMIN_ROLE_MARKERS
            .iter()
            .any(|marker| role.contains(marker))
    })
}
