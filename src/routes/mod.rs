//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos SSR page, the hydration bundle under `/pkg`, and a
//! health probe. The `/chat` backend is a separate service the browser calls
//! directly; nothing here proxies it.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR frontend plus static assets and `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg = pkg_dir(Path::new(leptos_options.site_root.as_ref()));

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Directory holding the WASM bundle, JS glue, and stylesheet.
fn pkg_dir(site_root: &Path) -> PathBuf {
    site_root.join("pkg")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
