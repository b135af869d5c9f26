use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guild::Table)
                    .if_not_exists()
                    .col(pk_uuid(Guild::Id))
                    .col(string_uniq(Guild::DiscordId))
                    .col(string(Guild::Name))
                    .col(string_null(Guild::IconUrl))
                    .col(string(Guild::OwnerId))
                    .col(boolean(Guild::BotPresent).default(false))
                    .col(
                        timestamp_with_time_zone(Guild::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Guild::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guild {
    Table,
    Id,
    DiscordId,
    Name,
    IconUrl,
    OwnerId,
    BotPresent,
    CreatedAt,
    UpdatedAt,
}
