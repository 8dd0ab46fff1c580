//! Router assembly.

mod admin;
mod common;
mod entity;

pub use admin::admin_routes;
pub use common::common_routes;
pub use entity::entity_routes;

use crate::config::DEFAULT_BODY_LIMIT_BYTES;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router with the default body limit.
pub fn build_router(state: AppState) -> Router {
    build_router_with_limit(state, DEFAULT_BODY_LIMIT_BYTES)
}

pub fn build_router_with_limit(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(entity_routes())
        .merge(admin_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit_bytes)),
        )
        .with_state(state)
}
