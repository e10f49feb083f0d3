use std::path::Path;

use axum::{Router, routing::post};
use tictactoe_engine::log;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::api;
use crate::config::ServerConfig;
use crate::registry::GameRegistry;

pub fn build_router(registry: GameRegistry, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/new_game", post(api::new_game))
        .route("/api/move", post(api::make_move))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .with_state(registry)
}

pub async fn run(registry: GameRegistry, config: &ServerConfig) -> Result<(), String> {
    let app = build_router(registry, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", config.bind_addr, e))?;

    log!("Web server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Web server error: {}", e))
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    log!("Shutdown signal received");
}
