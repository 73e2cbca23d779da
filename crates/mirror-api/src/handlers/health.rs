//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, Json};

use crate::response::{HealthResponse, ReadinessResponse};
use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    Json(ReadinessResponse::ready(state.config().mirror.is_configured()))
}
