//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Fails fast on a bad bcrypt cost
    let app_state = AppState::from_config(&config)?;
    tracing::info!(
        bcrypt_cost = config.bcrypt_cost,
        secure_mode = config.secure_mode,
        "User registry ready"
    );

    let app = create_router(app_state);

    let addr = format!(
        "{}:{}",
        args.host.unwrap_or(config.server_host),
        args.port.unwrap_or(config.server_port)
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
