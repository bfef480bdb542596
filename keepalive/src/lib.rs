//! # keepalive
//!
//! Answers `GET /` and `GET /health` with `200 OK` so hosting platforms keep the process alive.
//! Independent of the bot; the binary spawns it next to the dispatcher when a port is configured.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tracing::info;

pub fn router() -> Router {
    Router::new()
        .route("/", get(alive))
        .route("/health", get(alive))
}

/// Binds `addr` and serves [`router`] until the task is dropped or the listener fails.
pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Keep-alive endpoint listening");
    axum::serve(listener, router()).await
}

async fn alive() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
