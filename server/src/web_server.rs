use std::error::Error;
use std::time::Duration;

use axum::{
    Router,
    extract::{State, WebSocketUpgrade},
    response::IntoResponse,
    routing::get,
};
use common::{log, log_error};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::server_config::Config;
use crate::ws_handler::handle_websocket;

#[derive(Clone)]
pub struct WebServerState {
    pub thinking_delay: Duration,
}

pub fn build_router(config: &Config) -> Router {
    let state = WebServerState {
        thinking_delay: config.gameplay.thinking_delay(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_upgrade_handler))
        .fallback_service(ServeDir::new(&config.server.static_files_path))
        .layer(cors)
        .with_state(state)
}

pub async fn run_web_server(config: &Config) -> Result<(), Box<dyn Error>> {
    let app = build_router(config);

    let listener = tokio::net::TcpListener::bind(&config.server.address).await?;
    log!(
        "Web server listening on {} (static files from {})",
        listener.local_addr()?,
        config.server.static_files_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log_error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log!("Shutdown signal received, closing connections...");
}

async fn ws_upgrade_handler(
    ws: WebSocketUpgrade,
    State(state): State<WebServerState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}
