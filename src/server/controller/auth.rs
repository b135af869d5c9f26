use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, auth::SessionDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Exchanges a bearer token for the dashboard session.
///
/// Resolves or creates the caller's profile and lists the guilds where the bot is
/// present. When token reissue is configured a service-issued token is included.
#[utoipa::path(
    get,
    path = "/api/v1/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session established", body = SessionDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.authenticator, &headers)
        .require(&[])
        .await?;

    let session = AuthService::new(&state.db, &state.authenticator)
        .session(user)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}
