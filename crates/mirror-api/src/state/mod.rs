//! Application state
//!
//! Read-only after startup: the handler and the configuration it was built
//! from.

use std::sync::Arc;

use mirror_common::MirrorConfig;
use mirror_service::PresenceMirrorHandler;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Presence mirror handler
    handler: PresenceMirrorHandler,
    /// Application configuration
    config: Arc<MirrorConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(handler: PresenceMirrorHandler, config: MirrorConfig) -> Self {
        Self {
            handler,
            config: Arc::new(config),
        }
    }

    /// Get the presence mirror handler
    pub fn handler(&self) -> &PresenceMirrorHandler {
        &self.handler
    }

    /// Get the application configuration
    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("handler", &self.handler)
            .field("config", &"MirrorConfig")
            .finish()
    }
}
