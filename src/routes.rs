//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`                       - Service status (backend kind)
//! - `/books`, `/authors`, `/categories` - Catalog CRUD
//! - anything else                       - 404 `{"error": "Route not found"}`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::catalog_routes())
        .fallback(route_not_found_handler)
        .method_not_allowed_fallback(route_not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Catch-all for unmatched (method, path) pairs. A known path with an
/// unrouted method gets the same answer as an unknown path.
async fn route_not_found_handler() -> AppError {
    AppError::RouteNotFound
}
