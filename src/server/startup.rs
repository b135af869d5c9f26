use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::{auth::Authenticator, discord::DiscordApiClient},
    state::AppState,
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_LOG_FILTER: &str = "guildboard=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` and falls back to info level for this crate and the HTTP layer.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations to ensure the schema is up-to-date. This function
/// must complete successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared HTTP client.
///
/// Redirects are disabled so requests cannot be bounced to unexpected hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Assembles application state from configuration and connected resources.
pub fn setup_state(
    config: &Config,
    db: sea_orm::DatabaseConnection,
    http_client: reqwest::Client,
) -> AppState {
    if config.supabase_jwt_secret.is_some() {
        tracing::info!("Verifying provider tokens with the shared secret");
    } else {
        tracing::info!("Verifying provider tokens against {}", config.supabase_jwks_url());
    }
    if config.bot_gateway_secret.is_none() {
        tracing::warn!("BOT_GATEWAY_SECRET is not set; bot gateway calls will be rejected");
    }

    let authenticator = Authenticator::from_config(config, http_client.clone());
    let discord = DiscordApiClient::new(
        http_client,
        config.discord_api_url.clone(),
        config.discord_bot_token.clone(),
    );

    AppState::new(
        db,
        authenticator,
        discord,
        config.bot_gateway_secret.clone(),
    )
}

/// Allows the dashboard origin to call the API with credentials.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(&config.frontend_url).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "FRONTEND_URL".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
}

/// Resolves when the process receives Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
