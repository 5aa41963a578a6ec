//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{analytics, health, interactions};
use crate::state::AppState;

/// Create the main router with all routes (excluding health)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(analytics::home))
        .route("/api/interactions", post(interactions::handle_interaction))
        .route("/analytics", get(analytics::analytics_redirect))
        .route("/analytics/:guild_id", get(analytics::analytics_redirect))
        .route(
            "/analytics/:guild_id/:token_id",
            get(analytics::analytics_page),
        )
}

/// Health check routes (exported separately for probe handling)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
