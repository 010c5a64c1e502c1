//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio is a static site. Files under the website directory are
//! served at `/` (directories resolve to `index.html`), the compiled WASM
//! bundle is served at `/pkg`, and `/healthz` answers liveness probes.
//! Files are served byte-for-byte; no response compression is applied.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the site router for `config`.
pub fn app(config: &ServerConfig) -> Router {
    let website = ServeDir::new(&config.website_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(website)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
