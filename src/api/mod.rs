//! API module
//!
//! HTTP API endpoints and middleware.

pub mod middleware;
pub mod routes;
mod state;

use axum::http::{header, Method};
use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the application router.
///
/// With `require_auth` the transaction and summary routes sit behind the
/// bearer token guard; otherwise every route is public.
pub fn build_router(state: AppState, require_auth: bool) -> Router {
    let transaction_routes = if require_auth {
        routes::transaction_router().layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ))
    } else {
        routes::transaction_router()
    };

    // Layers run outermost-last: cors -> trace -> logging -> handler
    Router::new()
        .route("/health", get(health_check))
        .merge(routes::auth_router())
        .merge(transaction_routes)
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
