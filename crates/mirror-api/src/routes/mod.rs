//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, presence};
use crate::state::AppState;

/// Create the main router with trigger and health routes
pub fn create_router() -> Router<AppState> {
    Router::new().merge(trigger_routes()).merge(health_routes())
}

/// Database trigger deliveries
fn trigger_routes() -> Router<AppState> {
    Router::new().route("/presence/:u_id", post(presence::on_presence_write))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
