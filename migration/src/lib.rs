pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_profile_table;
mod m20260301_000002_create_guild_table;
mod m20260301_000003_create_guild_member_table;
mod m20260302_000004_create_permission_table;
mod m20260302_000005_create_guild_role_permission_table;
mod m20260302_000006_create_guild_user_permission_table;
mod m20260302_000007_seed_permissions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_profile_table::Migration),
            Box::new(m20260301_000002_create_guild_table::Migration),
            Box::new(m20260301_000003_create_guild_member_table::Migration),
            Box::new(m20260302_000004_create_permission_table::Migration),
            Box::new(m20260302_000005_create_guild_role_permission_table::Migration),
            Box::new(m20260302_000006_create_guild_user_permission_table::Migration),
            Box::new(m20260302_000007_seed_permissions::Migration),
        ]
    }
}
