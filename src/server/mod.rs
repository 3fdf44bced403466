//! HTTP surface
//!
//! Thin axum wiring around the core: a five-route router sharing one
//! processor behind an async read-write lock, with permissive CORS for
//! the browser frontend.
//!
//! # Routes
//!
//! - `POST /upload` - multipart CSV ingestion
//! - `GET /cards` - paginated card balances
//! - `GET /collections` - paginated negative-balance accounts
//! - `GET /bad-transactions` - paginated rejected rows
//! - `POST /reset` - clear all state
//!
//! # Concurrency
//!
//! Queries take read guards and may run concurrently; upload and reset
//! take the write guard for their whole batch, so readers never observe
//! a transfer mid-update and a reset never races an in-flight upload.

pub mod handlers;

use crate::core::TransactionProcessor;
use crate::types::LedgerError;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    processor: Arc<RwLock<TransactionProcessor>>,
}

impl AppState {
    /// Create state with an empty ledger
    pub fn new() -> Self {
        AppState {
            processor: Arc::new(RwLock::new(TransactionProcessor::new())),
        }
    }

    /// The shared processor lock
    pub fn processor(&self) -> &RwLock<TransactionProcessor> {
        &self.processor
    }
}

/// Build the application router over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/upload", post(handlers::upload))
        .route("/cards", get(handlers::cards))
        .route("/collections", get(handlers::collections))
        .route("/bad-transactions", get(handlers::bad_transactions))
        .route("/reset", post(handlers::reset))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the API until the process is stopped
///
/// # Arguments
///
/// * `bind` - Socket address to listen on
pub async fn serve(bind: SocketAddr) -> Result<(), LedgerError> {
    let state = AppState::new();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    println!("Server running on http://{}", bind);

    axum::serve(listener, app).await?;

    Ok(())
}
