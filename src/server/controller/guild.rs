use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        guild::{GuildDto, GuildMemberDto, GuildRoleDto, GuildSelectionInfoDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{discord::visible_roles, guild::GuildService},
        state::AppState,
    },
};

pub static GUILD_TAG: &str = "guild";

/// Lists every guild the caller is a member of, including guilds the bot has left.
#[utoipa::path(
    get,
    path = "/api/v1/guilds",
    tag = GUILD_TAG,
    responses(
        (status = 200, description = "Guilds of the authenticated user", body = Vec<GuildSelectionInfoDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_guilds(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[])
        .await?;

    let guilds = GuildService::new(&state.db).get_user_guilds(&user).await?;

    let dtos: Vec<_> = guilds.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a guild's details.
///
/// Returns the stored guild record, including whether the bot is currently present.
///
/// # Access Control
/// - `GuildMember` - Caller must be a member or the owner of the guild
///
/// # Arguments
/// - `state` - Application state containing the database connection and authenticator
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Internal guild ID
///
/// # Returns
/// - `200 OK` - Guild details
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not a member of the guild
/// - `404 Not Found` - Guild does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/guilds/{id}",
    tag = GUILD_TAG,
    params(
        ("id" = Uuid, Path, description = "Guild ID")
    ),
    responses(
        (status = 200, description = "Guild details", body = GuildDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a member of the guild", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[Permission::GuildMember(id)])
        .await?;

    let guild = GuildService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(guild.into_dto())))
}

/// Get the caller's membership in a guild.
///
/// # Access Control
/// - Any authenticated user; only their own membership is returned
///
/// # Arguments
/// - `state` - Application state containing the database connection and authenticator
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Internal guild ID
///
/// # Returns
/// - `200 OK` - Membership with the caller's Discord roles
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Caller has no membership in the guild
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/guilds/{id}/membership",
    tag = GUILD_TAG,
    params(
        ("id" = Uuid, Path, description = "Guild ID")
    ),
    responses(
        (status = 200, description = "Caller's membership", body = GuildMemberDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_membership(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[])
        .await?;

    let member = GuildService::new(&state.db)
        .get_membership(id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Lists the guild's assignable Discord roles, fetched live from Discord.
#[utoipa::path(
    get,
    path = "/api/v1/guilds/{id}/roles",
    tag = GUILD_TAG,
    params(
        ("id" = Uuid, Path, description = "Guild ID")
    ),
    responses(
        (status = 200, description = "Roles ordered by position, highest first", body = Vec<GuildRoleDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a member of the guild", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Discord unavailable or not configured", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_guild_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[Permission::GuildMember(id)])
        .await?;

    let guild = GuildService::new(&state.db).get_by_id(id).await?;
    let roles = state.discord.get_guild_roles(&guild.discord_id).await?;

    Ok((StatusCode::OK, Json(visible_roles(roles, &guild.discord_id))))
}
