use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateUserProfileDto, UserProfileDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        model::user::UpdateUserProfileParam, service::user::UserService, state::AppState,
    },
};

pub static USER_TAG: &str = "user";

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Profile of the authenticated user", body = UserProfileDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/me",
    tag = USER_TAG,
    request_body = UpdateUserProfileDto,
    responses(
        (status = 200, description = "Settings updated", body = UserProfileDto),
        (status = 400, description = "Malformed or invalid request body", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateUserProfileDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[])
        .await?;

    let Json(payload) = payload?;

    let updated = UserService::new(&state.db)
        .update_settings(user.id, UpdateUserProfileParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User profile ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserProfileDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
