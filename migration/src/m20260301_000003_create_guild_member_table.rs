use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_profile_table::UserProfile;
use super::m20260301_000002_create_guild_table::Guild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildMember::Table)
                    .if_not_exists()
                    .col(pk_uuid(GuildMember::Id))
                    .col(uuid(GuildMember::GuildId))
                    .col(uuid(GuildMember::UserId))
                    .col(json_binary(GuildMember::DiscordRoles))
                    .col(
                        timestamp_with_time_zone(GuildMember::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(GuildMember::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_member_guild_id")
                            .from(GuildMember::Table, GuildMember::GuildId)
                            .to(Guild::Table, Guild::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_member_user_id")
                            .from(GuildMember::Table, GuildMember::UserId)
                            .to(UserProfile::Table, UserProfile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_guild_member_guild_user_unique")
                            .col(GuildMember::GuildId)
                            .col(GuildMember::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildMember {
    Table,
    Id,
    GuildId,
    UserId,
    DiscordRoles,
    CreatedAt,
    UpdatedAt,
}
