//! API routes module

pub mod health;
pub mod products;

use axum::{Router, routing::get};
use axum_helpers::server::health_router;

use crate::state::AppState;

/// Create all API routes, probes included.
///
/// `/health` reports name and version, `/ready` pings the database. Both are
/// merged here so `create_router` wraps them with the same trace and timeout
/// layers as the product endpoints.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .merge(health_router(state.config.app.clone()))
        .merge(ready_router(state.clone()))
}

/// Router with the `/ready` endpoint.
///
/// State is applied here so it merges with the stateless app router.
fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
