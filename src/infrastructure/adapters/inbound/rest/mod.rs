//! REST adapter: HTTP routes over the application's inbound ports.
//!
//! Handlers receive ports through [`AppState`] and never construct services.
//! The router carries the CORS policy and request-ID middleware for every
//! route, including the OpenAPI document.

pub mod docs;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::infrastructure::configuration::{
    cors_layer, ConfigError, CACHE_CONTROL_HEALTH, OPENAPI_PATH,
};
use crate::infrastructure::http::middleware::request_id_layer;
use crate::infrastructure::state::AppState;

/// Creates the Axum router with all routes and middleware.
pub fn create_router(state: AppState) -> Result<Router, ConfigError> {
    let cors = cors_layer(&state.config.cors)?;

    // Health check - no caching, always fresh for liveness checks
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    let docs_routes = Router::new().route(OPENAPI_PATH, get(docs::openapi_json));

    Ok(Router::new()
        .merge(health_routes)
        .merge(docs_routes)
        .with_state(state)
        .layer(cors)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer)))
}
