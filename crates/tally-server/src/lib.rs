//! # Tally Server
//!
//! HTTP boundary for the Tally receipt points service. Two routes:
//!
//! - `POST /receipts/process` - validate and score a receipt, returning a
//!   generated identifier
//! - `GET /receipts/{id}/points` - return the stored score for an
//!   identifier
//!
//! All logic lives in `tally-core`; all state lives behind the
//! `tally-store` capability trait. The server only decodes, dispatches,
//! and translates errors.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use tally_store::MemoryStore;

pub use config::{CliArgs, ServerConfig};
pub use error::ApiError;
pub use handlers::AppState;

/// Build the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::get_points))
        .with_state(state)
}

/// Run the server until ctrl-c.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let state = AppState::new(Arc::new(MemoryStore::new()));
    let app = router(state);

    let listener = TcpListener::bind(config.bind_address).await?;
    let addr = listener.local_addr()?;
    tracing::info!(bind = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a signal handler there is no graceful shutdown, but the
        // server itself must keep serving.
        tracing::error!(error = %err, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
}
