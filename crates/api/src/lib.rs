//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The upload resource (`/api/upload`): preflight, create, fetch metadata, delete
//! - A health probe
//! - The browser upload form

pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use mediagate_core::asset::{AssetService, AssetStore};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
///
/// Read-only after startup; requests share nothing else.
pub struct AppState<S: AssetStore> {
    /// Asset service wrapping the remote store.
    pub assets: Arc<AssetService<S>>,
}

impl<S: AssetStore> AppState<S> {
    /// Create application state around an asset service.
    #[must_use]
    pub fn new(assets: AssetService<S>) -> Self {
        Self {
            assets: Arc::new(assets),
        }
    }
}

impl<S: AssetStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            assets: Arc::clone(&self.assets),
        }
    }
}

/// Creates the main application router.
///
/// `body_limit_bytes` caps the request body at the transport level; the
/// per-upload `max_size` rule is applied separately by the asset service.
pub fn create_router<S: AssetStore + 'static>(
    state: AppState<S>,
    body_limit_bytes: usize,
) -> Router {
    Router::new()
        .merge(routes::api_routes::<S>())
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
