use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfile::Table)
                    .if_not_exists()
                    .col(pk_uuid(UserProfile::Id))
                    .col(string_null(UserProfile::AuthUserId).unique_key())
                    .col(string_uniq(UserProfile::DiscordId))
                    .col(string(UserProfile::Username))
                    .col(string_null(UserProfile::AvatarUrl))
                    .col(boolean(UserProfile::GlobalTrackingDisabled).default(false))
                    .col(
                        timestamp_with_time_zone(UserProfile::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(UserProfile::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserProfile {
    Table,
    Id,
    AuthUserId,
    DiscordId,
    Username,
    AvatarUrl,
    GlobalTrackingDisabled,
    CreatedAt,
    UpdatedAt,
}
