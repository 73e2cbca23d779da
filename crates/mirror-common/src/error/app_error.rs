//! Application error types
//!
//! Process-level failures only. Nothing on the trigger path produces one of
//! these: a missing mirror URL or a failed delivery is logged, not raised.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    // Listener / serve loop errors
    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::HttpClient(_) => "HTTP_CLIENT_ERROR",
            Self::Server(_) => "SERVER_ERROR",
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
