use sea_orm_migration::prelude::*;

use super::m20260302_000004_create_permission_table::Permission;

/// Permission keys available to guild administrators: (key, description, module).
const PERMISSIONS: &[(&str, &str, &str)] = &[
    ("category:create", "Create dynamic voice categories", "Dynamic Voices"),
    ("category:read", "View dynamic voice categories", "Dynamic Voices"),
    ("category:update", "Edit dynamic voice categories", "Dynamic Voices"),
    ("category:delete", "Delete dynamic voice categories", "Dynamic Voices"),
    (
        "category:manage_permissions",
        "Manage who may use a dynamic voice category",
        "Dynamic Voices",
    ),
    ("zone:create", "Create zones within a category", "Dynamic Voices"),
    ("zone:read", "View zones within a category", "Dynamic Voices"),
    ("zone:update", "Edit zones within a category", "Dynamic Voices"),
    ("zone:delete", "Delete zones within a category", "Dynamic Voices"),
    ("admin:read:permissions", "View permission assignments", "Admin"),
    ("admin:assign:permissions", "Assign and revoke permissions", "Admin"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Permission::Table).columns([
            Permission::PermissionKey,
            Permission::Description,
            Permission::Module,
        ]);

        for (key, description, module) in PERMISSIONS {
            insert
                .values([(*key).into(), (*description).into(), (*module).into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        insert.on_conflict(
            OnConflict::column(Permission::PermissionKey)
                .do_nothing()
                .to_owned(),
        );

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let keys: Vec<&str> = PERMISSIONS.iter().map(|(key, _, _)| *key).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Permission::Table)
                    .and_where(Expr::col(Permission::PermissionKey).is_in(keys))
                    .to_owned(),
            )
            .await
    }
}
