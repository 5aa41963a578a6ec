//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use starkcord_common::{AppConfig, AppError};
use starkcord_db::{create_pool, PgGuildConfigRepository, PgLinkRepository, PgTokenValidator};
use starkcord_discord::DiscordRestClient;
use starkcord_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = starkcord_db::DatabaseConfig::new(config.database.url.clone())
        .with_pool_size(config.database.min_connections, config.database.max_connections);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create repositories
    let link_repo = Arc::new(PgLinkRepository::new(pool.clone()));
    let guild_repo = Arc::new(PgGuildConfigRepository::new(pool.clone()));
    let token_validator = Arc::new(PgTokenValidator::new(pool.clone()));

    // Create the Discord REST client; it backs both gateway ports
    let discord = Arc::new(DiscordRestClient::with_api_base(
        config.discord.bot_token.clone(),
        config.discord.api_base.clone(),
    ));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .link_repo(link_repo)
        .guild_repo(guild_repo)
        .token_validator(token_validator)
        .role_gateway(discord.clone())
        .guild_directory(discord)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
