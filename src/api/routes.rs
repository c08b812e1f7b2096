//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Order linking
        .route("/orderlinking", post(handlers::create_order_link))
        .route("/orderlinking/links", get(handlers::list_order_links))
        .route("/orderlinking/{link_id}", get(handlers::get_order_link))
        // Orders
        .route("/orders", get(handlers::list_orders))
        .with_state(state)
}
