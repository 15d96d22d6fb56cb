//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget is a static WASM bundle. This router serves that bundle from
//! disk with an `index.html` fallback, plus a health probe for deployments.

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Build the app router serving the bundle in `dist_dir`.
pub fn app(dist_dir: &Path) -> Router {
    let bundle = ServeDir::new(dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(bundle)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
