use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "permission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub permission_key: String,
    pub description: Option<String>,
    pub module: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::guild_role_permission::Entity")]
    GuildRolePermission,
    #[sea_orm(has_many = "super::guild_user_permission::Entity")]
    GuildUserPermission,
}

impl Related<super::guild_role_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildRolePermission.def()
    }
}

impl Related<super::guild_user_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildUserPermission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
