use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{
    data::{GuildMemberRepository, UserProfileRepository},
    error::AppError,
    model::guild::{RegisterGuildMemberParam, UpsertGuildParam},
    service::bot_gateway::BotGatewayService,
};

mod register_guild_member;

fn member_param(guild_id: Uuid, discord_id: &str, roles: &[&str]) -> RegisterGuildMemberParam {
    RegisterGuildMemberParam {
        guild_id,
        discord_id: discord_id.to_string(),
        username: format!("Member {}", discord_id),
        avatar_url: None,
        discord_roles: roles.iter().map(|r| r.to_string()).collect(),
    }
}
