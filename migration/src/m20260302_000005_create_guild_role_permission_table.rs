use sea_orm_migration::{prelude::*, schema::*};

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
                    .table(GuildRolePermission::Table)
                    .if_not_exists()
                    .col(uuid(GuildRolePermission::GuildId))
                    .col(string(GuildRolePermission::DiscordRoleId))
                    .col(integer(GuildRolePermission::PermissionId))
                    .col(
                        timestamp_with_time_zone(GuildRolePermission::AssignedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(GuildRolePermission::GuildId)
                            .col(GuildRolePermission::DiscordRoleId)
                            .col(GuildRolePermission::PermissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_role_permission_guild_id")
                            .from(GuildRolePermission::Table, GuildRolePermission::GuildId)
                            .to(Guild::Table, Guild::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_role_permission_permission_id")
                            .from(GuildRolePermission::Table, GuildRolePermission::PermissionId)
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
            .drop_table(Table::drop().table(GuildRolePermission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildRolePermission {
    Table,
    GuildId,
    DiscordRoleId,
    PermissionId,
    AssignedAt,
}
