use axum::Router;
use utoipa::{
    openapi::{
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
        Components,
    },
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        bot_gateway::{self, BOT_GATEWAY_TAG},
        guild::{self, GUILD_TAG},
        health::{self, HEALTH_TAG},
        permission::{self, PERMISSION_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Guildboard API", description = "Discord guild dashboard backend"),
    modifiers(&BearerSecurity),
    tags(
        (name = HEALTH_TAG, description = "Liveness"),
        (name = AUTH_TAG, description = "Session bridge"),
        (name = USER_TAG, description = "User profiles"),
        (name = GUILD_TAG, description = "Guilds and memberships"),
        (name = PERMISSION_TAG, description = "Guild permission grants"),
        (name = BOT_GATEWAY_TAG, description = "Writes from the Discord bot"),
    )
)]
struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::new);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the API routes with Swagger UI served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::get_session))
        .routes(routes!(user::get_current_user, user::update_current_user))
        .routes(routes!(user::get_user_by_id))
        .routes(routes!(guild::get_user_guilds))
        .routes(routes!(guild::get_guild))
        .routes(routes!(guild::get_membership))
        .routes(routes!(guild::get_guild_roles))
        .routes(routes!(permission::get_all_permissions))
        .routes(routes!(permission::get_my_permissions))
        .routes(routes!(
            permission::get_role_assignments,
            permission::assign_role_permission
        ))
        .routes(routes!(permission::revoke_role_permission))
        .routes(routes!(
            permission::get_user_assignments,
            permission::assign_user_permission
        ))
        .routes(routes!(permission::revoke_user_permission))
        .routes(routes!(bot_gateway::register_guild))
        .routes(routes!(bot_gateway::register_guild_member))
        .routes(routes!(bot_gateway::update_bot_status))
        .routes(routes!(bot_gateway::remove_guild_member))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
