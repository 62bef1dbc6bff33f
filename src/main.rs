//! Room Timer - An in-memory HTTP server for pausable countdown timers
//!
//! This is the main entry point for the room-timer application.

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use room_timer::{
    api::{cors_layer, create_router},
    config::Config,
    state::AppState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("room_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting room-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, cors_origin={}",
          config.host, config.port, config.cors_origin);

    let cors = cors_layer(&config.cors_origin)
        .with_context(|| format!("invalid CORS origin '{}'", config.cors_origin))?;

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Create HTTP router with all endpoints
    let app = create_router(state, cors);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /room/create        - Create a room");
    info!("  GET  /room/:id           - Fetch a room");
    info!("  GET  /room/:id/timers    - List timers of a room");
    info!("  POST /user/create        - Create a user");
    info!("  GET  /user/:id           - Fetch a user");
    info!("  POST /timer/start        - Start a timer");
    info!("  POST /timer/pause/:id    - Pause a timer");
    info!("  POST /timer/resume/:id   - Resume a timer");
    info!("  POST /timer/stop/:id     - Stop a timer");
    info!("  GET  /timer/:id          - Fetch a timer");
    info!("  GET  /status             - Server status");
    info!("  GET  /health             - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received");
        })
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}
