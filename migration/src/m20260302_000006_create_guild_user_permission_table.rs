use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_profile_table::UserProfile;
use super::m20260301_000002_create_guild_table::Guild;
use super::m20260302_000004_create_permission_table::Permission;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildUserPermission::Table)
                    .if_not_exists()
                    .col(uuid(GuildUserPermission::GuildId))
                    .col(uuid(GuildUserPermission::UserProfileId))
                    .col(integer(GuildUserPermission::PermissionId))
                    .col(
                        timestamp_with_time_zone(GuildUserPermission::AssignedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(GuildUserPermission::GuildId)
                            .col(GuildUserPermission::UserProfileId)
                            .col(GuildUserPermission::PermissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_user_permission_guild_id")
                            .from(GuildUserPermission::Table, GuildUserPermission::GuildId)
                            .to(Guild::Table, Guild::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_user_permission_user_profile_id")
                            .from(GuildUserPermission::Table, GuildUserPermission::UserProfileId)
                            .to(UserProfile::Table, UserProfile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_user_permission_permission_id")
                            .from(GuildUserPermission::Table, GuildUserPermission::PermissionId)
                            .to(Permission::Table, Permission::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildUserPermission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildUserPermission {
    Table,
    GuildId,
    UserProfileId,
    PermissionId,
    AssignedAt,
}
