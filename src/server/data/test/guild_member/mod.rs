use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{data::guild_member::GuildMemberRepository, model::guild::UpsertGuildMemberParam};

mod delete;
mod upsert;
