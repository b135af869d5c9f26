use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{guild::GuildSelectionInfoDto, user::SessionUserDto};

/// Session established from a verified bearer token.
///
/// `token` carries a service-issued token when token reissue is configured and is
/// `null` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionDto {
    pub user: SessionUserDto,
    #[serde(rename = "availableGuilds")]
    pub available_guilds: Vec<GuildSelectionInfoDto>,
    pub token: Option<String>,
}
