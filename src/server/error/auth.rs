use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied with the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The bearer token failed verification.
    ///
    /// Covers bad signatures, expiry, wrong audience or issuer, missing claims and
    /// unknown signing keys. Results in a 401 Unauthorized response.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(String),

    /// The provider token carries no Discord identity to build a profile from.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Token for subject {0} has no Discord identity")]
    MissingDiscordIdentity(String),

    /// A service-issued token refers to a profile that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} not found in database")]
    UserNotInDatabase(Uuid),

    /// The user is authenticated but lacks access to the requested resource.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(Uuid, String),

    /// The bot gateway secret is missing, wrong or not configured.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid bot gateway credentials")]
    InvalidBotCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing or rejected credentials
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to access this resource",
            ),
            Self::InvalidBotCredentials => (StatusCode::UNAUTHORIZED, "Invalid bot credentials"),
            Self::MissingToken
            | Self::InvalidToken(_)
            | Self::MissingDiscordIdentity(_)
            | Self::UserNotInDatabase(_) => (StatusCode::UNAUTHORIZED, "Unauthorized"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
