use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        permission::{
            AssignPermissionToDiscordRoleDto, AssignPermissionToUserDto,
            EffectivePermissionsDto, GuildDiscordRolePermissionAssignmentDto,
            GuildUserPermissionAssignmentDto, PermissionDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::permission::{ASSIGN_PERMISSIONS, READ_PERMISSIONS},
        service::access_control::AccessControlService,
        state::AppState,
    },
};

pub static PERMISSION_TAG: &str = "permission";

fn assigned_status(created: bool) -> StatusCode {
    if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/permissions",
    tag = PERMISSION_TAG,
    responses(
        (status = 200, description = "Permission catalog", body = Vec<PermissionDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_all_permissions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[])
        .await?;

    let permissions = AccessControlService::new(&state.db)
        .get_all_permissions()
        .await?;

    let dtos: Vec<_> = permissions.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Returns the caller's admin flag and effective permission keys in a guild.
#[utoipa::path(
    get,
    path = "/api/v1/guilds/{id}/permissions/me",
    tag = PERMISSION_TAG,
    params(
        ("id" = Uuid, Path, description = "Guild ID")
    ),
    responses(
        (status = 200, description = "Effective permissions", body = EffectivePermissionsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a member of the guild", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_permissions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[Permission::GuildMember(id)])
        .await?;

    let access = AccessControlService::new(&state.db)
        .guild_access(&user, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(EffectivePermissionsDto {
            is_admin: access.is_admin,
            permissions: access.permissions,
        }),
    ))
}

/// List permission keys granted to Discord roles in a guild.
///
/// # Access Control
/// - `admin:read:permissions` - Guild admins always pass
///
/// # Arguments
/// - `state` - Application state containing the database connection and authenticator
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Internal guild ID
///
/// # Returns
/// - `200 OK` - One entry per role with its granted keys
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks the read grant
/// - `404 Not Found` - Guild does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/guilds/{id}/permissions/roles",
    tag = PERMISSION_TAG,
    params(
        ("id" = Uuid, Path, description = "Guild ID")
    ),
    responses(
        (status = 200, description = "Role grants grouped by role", body = Vec<GuildDiscordRolePermissionAssignmentDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks admin:read:permissions", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_role_assignments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[Permission::Grant(id, READ_PERMISSIONS)])
        .await?;

    let assignments = AccessControlService::new(&state.db)
        .get_role_assignments(id)
        .await?;

    let dtos: Vec<_> = assignments.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Grant a permission key to a Discord role.
///
/// Assigning is idempotent: repeating a grant succeeds without creating a duplicate.
///
/// # Access Control
/// - `admin:assign:permissions` - Guild admins always pass
///
/// # Arguments
/// - `state` - Application state containing the database connection and authenticator
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Internal guild ID
/// - `payload` - Role string and permission key to grant
///
/// # Returns
/// - `201 Created` - Grant created
/// - `200 OK` - Role already held the key
/// - `400 Bad Request` - Malformed body or blank fields
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks the assign grant
/// - `404 Not Found` - Guild or permission key does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/guilds/{id}/permissions/roles",
    tag = PERMISSION_TAG,
    params(
        ("id" = Uuid, Path, description = "Guild ID")
    ),
    request_body = AssignPermissionToDiscordRoleDto,
    responses(
        (status = 201, description = "Permission granted to role", body = SuccessDto),
        (status = 200, description = "Role already held the permission", body = SuccessDto),
        (status = 400, description = "Malformed or invalid request body", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks admin:assign:permissions", body = ErrorDto),
        (status = 404, description = "Guild or permission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn assign_role_permission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    payload: Result<Json<AssignPermissionToDiscordRoleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[Permission::Grant(id, ASSIGN_PERMISSIONS)])
        .await?;

    let Json(payload) = payload?;

    let created = AccessControlService::new(&state.db)
        .assign_to_role(id, &payload.discord_role_id, &payload.permission_key)
        .await?;

    Ok((assigned_status(created), Json(SuccessDto { success: true })))
}

/// Revoke a permission key from a Discord role.
///
/// Revoking a grant that does not exist, or an unknown key, still succeeds.
///
/// # Access Control
/// - `admin:assign:permissions` - Guild admins always pass
///
/// # Returns
/// - `200 OK` - Grant removed or already absent
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks the assign grant
/// - `404 Not Found` - Guild does not exist
#[utoipa::path(
    delete,
    path = "/api/v1/guilds/{id}/permissions/roles/{role_id}/{key}",
    tag = PERMISSION_TAG,
    params(
        ("id" = Uuid, Path, description = "Guild ID"),
        ("role_id" = String, Path, description = "Discord role string"),
        ("key" = String, Path, description = "Permission key")
    ),
    responses(
        (status = 200, description = "Grant removed or absent", body = SuccessDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks admin:assign:permissions", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn revoke_role_permission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, role_id, key)): Path<(Uuid, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[Permission::Grant(id, ASSIGN_PERMISSIONS)])
        .await?;

    AccessControlService::new(&state.db)
        .revoke_from_role(id, &role_id, &key)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// List permission keys granted directly to users in a guild.
///
/// # Access Control
/// - `admin:read:permissions` - Guild admins always pass
///
/// # Arguments
/// - `state` - Application state containing the database connection and authenticator
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Internal guild ID
///
/// # Returns
/// - `200 OK` - One entry per user with their granted keys
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks the read grant
/// - `404 Not Found` - Guild does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/guilds/{id}/permissions/users",
    tag = PERMISSION_TAG,
    params(
        ("id" = Uuid, Path, description = "Guild ID")
    ),
    responses(
        (status = 200, description = "Direct grants grouped by user", body = Vec<GuildUserPermissionAssignmentDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks admin:read:permissions", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_assignments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[Permission::Grant(id, READ_PERMISSIONS)])
        .await?;

    let assignments = AccessControlService::new(&state.db)
        .get_user_assignments(id)
        .await?;

    let dtos: Vec<_> = assignments.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Grant a permission key directly to a user.
///
/// # Access Control
/// - `admin:assign:permissions` - Guild admins always pass
///
/// # Arguments
/// - `state` - Application state containing the database connection and authenticator
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Internal guild ID
/// - `payload` - Target user ID and permission key to grant
///
/// # Returns
/// - `201 Created` - Grant created
/// - `200 OK` - User already held the key
/// - `400 Bad Request` - Malformed body or blank permission key
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks the assign grant
/// - `404 Not Found` - Guild, user or permission key does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/guilds/{id}/permissions/users",
    tag = PERMISSION_TAG,
    params(
        ("id" = Uuid, Path, description = "Guild ID")
    ),
    request_body = AssignPermissionToUserDto,
    responses(
        (status = 201, description = "Permission granted to user", body = SuccessDto),
        (status = 200, description = "User already held the permission", body = SuccessDto),
        (status = 400, description = "Malformed or invalid request body", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks admin:assign:permissions", body = ErrorDto),
        (status = 404, description = "Guild, user or permission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn assign_user_permission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    payload: Result<Json<AssignPermissionToUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[Permission::Grant(id, ASSIGN_PERMISSIONS)])
        .await?;

    let Json(payload) = payload?;

    let created = AccessControlService::new(&state.db)
        .assign_to_user(id, payload.user_id, &payload.permission_key)
        .await?;

    Ok((assigned_status(created), Json(SuccessDto { success: true })))
}

/// Revoke a direct grant from a user; absent grants and unknown keys still succeed.
///
/// # Access Control
/// - `admin:assign:permissions` - Guild admins always pass
#[utoipa::path(
    delete,
    path = "/api/v1/guilds/{id}/permissions/users/{user_id}/{key}",
    tag = PERMISSION_TAG,
    params(
        ("id" = Uuid, Path, description = "Guild ID"),
        ("user_id" = Uuid, Path, description = "User profile ID"),
        ("key" = String, Path, description = "Permission key")
    ),
    responses(
        (status = 200, description = "Grant removed or absent", body = SuccessDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks admin:assign:permissions", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn revoke_user_permission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, user_id, key)): Path<(Uuid, Uuid, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[Permission::Grant(id, ASSIGN_PERMISSIONS)])
        .await?;

    AccessControlService::new(&state.db)
        .revoke_from_user(id, user_id, &key)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
