use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub auth_user_id: Option<String>,
    #[sea_orm(unique)]
    pub discord_id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub global_tracking_disabled: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::guild_member::Entity")]
    GuildMember,
    #[sea_orm(has_many = "super::guild_user_permission::Entity")]
    GuildUserPermission,
}

impl Related<super::guild_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildMember.def()
    }
}

impl Related<super::guild_user_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildUserPermission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
