//! Presence mirror entry point
//!
//! Run with:
//! ```bash
//! API_MIRROR_URL=https://example.com/presence cargo run -p mirror-api
//! ```
//!
//! Configuration is loaded once from environment variables (and `.env`).

use mirror_common::{try_init_tracing_with_config, AppError, MirrorConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration first: the log format depends on APP_ENV
    let config = match MirrorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(code = e.error_code(), error = %e, "Presence mirror failed");
        std::process::exit(1);
    }
}

async fn run(config: MirrorConfig) -> Result<(), AppError> {
    info!(
        app = %config.app.name,
        env = ?config.app.env,
        address = %config.server.address(),
        mirror_configured = config.mirror.is_configured(),
        "Starting presence mirror"
    );

    mirror_api::run(config).await
}
