use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub discord_id: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub owner_id: String,
    pub bot_present: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::guild_member::Entity")]
    GuildMember,
    #[sea_orm(has_many = "super::guild_role_permission::Entity")]
    GuildRolePermission,
    #[sea_orm(has_many = "super::guild_user_permission::Entity")]
    GuildUserPermission,
}

impl Related<super::guild_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildMember.def()
    }
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
