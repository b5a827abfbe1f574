//! Router assembly for the contacts HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with CORS
//! and tracing middleware layers.

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

/// Builds the router with permissive CORS.
pub fn build_router(state: AppState) -> Router {
    routes(state, CorsLayer::permissive())
}

/// Builds the router with CORS restricted to the configured frontend origin,
/// or permissive when none is configured.
pub fn build_router_with_config(state: AppState, config: &ServerConfig) -> Router {
    routes(state, cors_layer(config.frontend_origin.clone()))
}

fn cors_layer(origin: Option<HeaderValue>) -> CorsLayer {
    match origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    }
}

/// Routes use axum 0.8 `/{param}` path syntax.
/// TraceLayer provides request-level access logging via tracing.
fn routes(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(handlers::root::welcome))
        .route(
            "/contacts",
            get(handlers::contacts::list_contacts).post(handlers::contacts::create_contact),
        )
        .route(
            "/contacts/{id}",
            get(handlers::contacts::get_contact)
                .put(handlers::contacts::update_contact)
                .delete(handlers::contacts::delete_contact),
        )
        .fallback(handlers::root::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
