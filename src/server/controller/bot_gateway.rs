use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        bot_gateway::{
            RegisterGuildDto, RegisterGuildMemberDto, RegistrationResultDto,
            RemoveGuildMemberDto, UpdateBotStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::bot_gateway::BotGatewayGuard,
        model::guild::{RegisterGuildMemberParam, UpsertGuildParam},
        service::bot_gateway::BotGatewayService,
        state::AppState,
    },
};

pub static BOT_GATEWAY_TAG: &str = "bot_gateway";

/// Register a guild the bot has joined, or refresh its details.
///
/// # Access Control
/// - Bot gateway secret as the bearer token
///
/// # Returns
/// - `200 OK` - Internal guild ID and whether it was newly created
/// - `400 Bad Request` - Malformed body, non-numeric Discord IDs or a blank name
/// - `401 Unauthorized` - Missing, wrong or unconfigured gateway secret
#[utoipa::path(
    post,
    path = "/api/v1/bot-gateway/register-guild",
    tag = BOT_GATEWAY_TAG,
    request_body = RegisterGuildDto,
    responses(
        (status = 200, description = "Guild registered or refreshed", body = RegistrationResultDto),
        (status = 400, description = "Malformed or invalid request body", body = ErrorDto),
        (status = 401, description = "Invalid bot credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn register_guild(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<RegisterGuildDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    BotGatewayGuard::new(state.bot_gateway_secret.as_deref(), &headers).require()?;

    let Json(payload) = payload?;

    let registration = BotGatewayService::new(&state.db)
        .register_guild(UpsertGuildParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(registration.into_dto())))
}

/// Register a guild member, creating their profile when unknown.
///
/// The member's Discord roles are replaced with the reported list.
///
/// # Access Control
/// - Bot gateway secret as the bearer token
///
/// # Returns
/// - `200 OK` - Membership ID and whether it was newly created
/// - `400 Bad Request` - Malformed body, non-numeric Discord ID or a blank username
/// - `401 Unauthorized` - Missing, wrong or unconfigured gateway secret
/// - `404 Not Found` - Guild does not exist
#[utoipa::path(
    post,
    path = "/api/v1/bot-gateway/register-guild-member",
    tag = BOT_GATEWAY_TAG,
    request_body = RegisterGuildMemberDto,
    responses(
        (status = 200, description = "Membership registered or refreshed", body = RegistrationResultDto),
        (status = 400, description = "Malformed or invalid request body", body = ErrorDto),
        (status = 401, description = "Invalid bot credentials", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn register_guild_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<RegisterGuildMemberDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    BotGatewayGuard::new(state.bot_gateway_secret.as_deref(), &headers).require()?;

    let Json(payload) = payload?;

    let registration = BotGatewayService::new(&state.db)
        .register_guild_member(RegisterGuildMemberParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(registration.into_dto())))
}

/// Record whether the bot is present in a guild.
#[utoipa::path(
    post,
    path = "/api/v1/bot-gateway/update-bot-status",
    tag = BOT_GATEWAY_TAG,
    request_body = UpdateBotStatusDto,
    responses(
        (status = 200, description = "Bot presence updated", body = SuccessDto),
        (status = 400, description = "Malformed or invalid request body", body = ErrorDto),
        (status = 401, description = "Invalid bot credentials", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_bot_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateBotStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    BotGatewayGuard::new(state.bot_gateway_secret.as_deref(), &headers).require()?;

    let Json(payload) = payload?;

    BotGatewayService::new(&state.db)
        .update_bot_status(payload.guild_id, payload.is_present)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Remove a member from a guild; unknown members are ignored.
#[utoipa::path(
    post,
    path = "/api/v1/bot-gateway/remove-guild-member",
    tag = BOT_GATEWAY_TAG,
    request_body = RemoveGuildMemberDto,
    responses(
        (status = 200, description = "Membership removed or absent", body = SuccessDto),
        (status = 400, description = "Malformed or invalid request body", body = ErrorDto),
        (status = 401, description = "Invalid bot credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_guild_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<RemoveGuildMemberDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    BotGatewayGuard::new(state.bot_gateway_secret.as_deref(), &headers).require()?;

    let Json(payload) = payload?;

    BotGatewayService::new(&state.db)
        .remove_guild_member(payload.guild_id, &payload.discord_id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
