//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page routes (Leptos SSR) sit behind the edge filter. Health and static
//! asset routes are mounted outside it, so they never redirect.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware::edge_filter;
use crate::state::AppState;

/// Wrap `pages` in the edge filter and add the unfiltered routes.
pub fn app(state: AppState, pages: Router) -> Router {
    let gated = pages.layer(from_fn_with_state(state, edge_filter));

    Router::new()
        .route("/healthz", get(healthz))
        .merge(gated)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Leptos SSR frontend: pages behind the edge filter + `/pkg` assets.
///
/// `/pkg` is served from `site_root` when given, else from the Leptos
/// `site-root` option.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState, site_root: Option<&Path>) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let pages = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = site_root.map_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()), Path::to_path_buf);

    Ok(app(state, pages).nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
