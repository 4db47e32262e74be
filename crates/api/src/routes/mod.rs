//! API route definitions.

use axum::Router;
use mediagate_core::asset::AssetStore;

use crate::AppState;

pub mod client;
pub mod health;
pub mod upload;

/// Creates the API router with all routes.
pub fn api_routes<S: AssetStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        .merge(health::routes::<S>())
        .merge(client::routes::<S>())
        .merge(upload::routes::<S>())
}
