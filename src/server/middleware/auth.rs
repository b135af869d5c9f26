use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::UserProfile,
    service::{
        access_control::AccessControlService,
        auth::{AuthService, Authenticator},
    },
};

/// Access requirement checked after authentication.
pub enum Permission {
    /// Member or owner of the guild.
    GuildMember(Uuid),
    /// Holder of the permission key in the guild; guild admins always pass.
    Grant(Uuid, &'static str),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    authenticator: &'a Authenticator,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        authenticator: &'a Authenticator,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            authenticator,
            headers,
        }
    }

    /// Authenticates the request and checks every permission in order.
    ///
    /// # Arguments
    /// - `permissions` - Requirements to check; an empty slice only authenticates
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The authenticated user
    /// - `Err(AppError::AuthErr)` - Missing or rejected token (401) or a failed
    ///   requirement (403)
    /// - `Err(AppError::NotFound)` - A requirement names a guild that does not exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<UserProfile, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let user = AuthService::new(self.db, self.authenticator)
            .authenticate(token)
            .await?;

        let access_control = AccessControlService::new(self.db);
        for permission in permissions {
            match permission {
                Permission::GuildMember(guild_id) => {
                    let access = access_control.guild_access(&user, *guild_id).await?;
                    if !access.is_member() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User is not a member of guild {}", guild_id),
                        )
                        .into());
                    }
                }
                Permission::Grant(guild_id, permission_key) => {
                    if !access_control
                        .can_user_perform_action(&user, *guild_id, permission_key)
                        .await?
                    {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User lacks {} in guild {}", permission_key, guild_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
