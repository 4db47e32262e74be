//! Browser upload form.

use axum::{Router, response::Html, routing::get};
use mediagate_core::asset::AssetStore;

use crate::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Creates the form page route.
pub fn routes<S: AssetStore + 'static>() -> Router<AppState<S>> {
    Router::new().route("/", get(index))
}
