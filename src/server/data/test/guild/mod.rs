use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{data::guild::GuildRepository, model::guild::UpsertGuildParam};

mod upsert;

fn param(discord_id: &str, name: &str) -> UpsertGuildParam {
    UpsertGuildParam {
        discord_id: discord_id.to_string(),
        name: name.to_string(),
        icon_url: None,
        owner_id: "owner-1".to_string(),
    }
}
