//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the read-only catalog API and stitches it with Leptos
//! SSR rendering under a single Axum router. Leptos build output is served
//! at `/pkg` and site images at `/public`.

pub mod ngos;
pub mod projects;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use catalog::CatalogError;

use crate::state::AppState;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// JSON API and health check.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/ngos", get(ngos::list_ngos))
        .route("/api/ngos/{id}", get(ngos::get_ngo))
        .route("/api/projects", get(projects::list_projects))
        .route("/api/projects/{id}", get(projects::get_project))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full site: API routes + Leptos SSR pages + static assets. Paths no route
/// claims render the app's not-found page with a 404.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let assets_dir = state.config.assets_dir.clone();
    tracing::info!(
        site_root = %site_root_path.display(),
        assets = %assets_dir.display(),
        "serving static files"
    );

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/public", ServeDir::new(assets_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default())))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Unknown filter labels are client errors; a malformed project id names
/// nothing, so it is reported like an unknown one.
pub(crate) fn catalog_error_to_status(err: CatalogError) -> StatusCode {
    match err {
        CatalogError::UnknownCategory(_) | CatalogError::UnknownStatus(_) => {
            StatusCode::BAD_REQUEST
        }
        CatalogError::InvalidProjectId(_) => StatusCode::NOT_FOUND,
    }
}
