//! HTTP adapter built on axum.

pub mod actor;
pub mod asset;
pub mod error;
pub mod validation;

use crate::application::asset::AssetController;
use crate::domain::ports::AssetServiceRef;
use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub controller: AssetController,
}

impl AppState {
    pub fn new(service: AssetServiceRef) -> Self {
        Self {
            controller: AssetController::new(service),
        }
    }
}

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(service: AssetServiceRef) -> Router {
    Router::new()
        .route("/health", get(asset::health))
        .route(
            "/asset/cio/unprocessedOut",
            get(asset::find_unprocessed_cash_out),
        )
        .route("/asset/cio/withdraw", post(asset::withdraw))
        .layer(middleware::from_fn(actor::bind_actor))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(service))
}

/// Serve the API on a pre-bound listener until the process is stopped.
pub async fn serve(
    listener: tokio::net::TcpListener,
    service: AssetServiceRef,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("asset API listening on http://{addr}");
    axum::serve(listener, build_router(service)).await
}
