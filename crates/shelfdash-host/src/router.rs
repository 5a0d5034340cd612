//! Axum router wiring for the asset host.
//!
//! - `/`, `/index.html` : the dashboard, rendered per request
//! - `/favicon.ico`     : the configured favicon, which lives outside the root
//! - anything else      : files under `host.root` (404 when absent)

use axum::{routing::get, Router};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{app_state::AppState, config::HostSection, dashboard};

pub fn build_router(host: &HostSection, state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/index.html", get(dashboard::index))
        .route_service("/favicon.ico", ServeFile::new(&host.favicon))
        .fallback_service(ServeDir::new(&host.root))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
