//! Server setup and initialization
//!
//! Provides the application builder and server runner. All process-wide
//! setup happens here, once, before the listener accepts anything.

use std::sync::Arc;

use axum::Router;
use mirror_common::{AppError, MirrorConfig, MIRROR_URL_VAR};
use mirror_service::{HttpMirrorSink, PresenceMirrorHandler};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize the HTTP client and handler, and create AppState
pub fn create_app_state(config: MirrorConfig) -> Result<AppState, AppError> {
    let sink = HttpMirrorSink::from_config(&config.mirror)?;

    match config.mirror.destination() {
        Some(url) => info!(url = %url, "Mirroring presence writes"),
        // Not fatal: each invocation logs and skips instead
        None => warn!(var = MIRROR_URL_VAR, "Mirror URL not set, presence writes will not be mirrored"),
    }

    let handler = PresenceMirrorHandler::new(Arc::new(sink), config.mirror.clone());

    Ok(AppState::new(handler, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, address: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {address}: {e}")))?;

    let local_addr = listener
        .local_addr()
        .map_err(|e| AppError::Server(e.to_string()))?;
    info!("Trigger ingress listening on http://{}", local_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: MirrorConfig) -> Result<(), AppError> {
    let address = config.server.address();

    // Create app state
    let state = create_app_state(config)?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &address).await
}
