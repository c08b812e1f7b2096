//! API request handlers.

use crate::db::LinkId;
use crate::error::ApiError;
use crate::linking;
use crate::models::{
    CreateLinkRequest, HealthResponse, OrderLinkDetail, OrderLinkSummary, OrderSummary,
};
use crate::state::AppState;
use crate::summary;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{HeaderName, LOCATION};
use std::sync::Arc;
use tracing::{error, warn};


/// Response for a created link: status, `Location` header and the new id.
pub type CreatedLink = (StatusCode, [(HeaderName, String); 1], Json<LinkId>);

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Order Linking
// ============================================================================

/// Link two or more orders under a new name.
#[utoipa::path(
    post,
    path = "/orderlinking",
    request_body = CreateLinkRequest,
    responses(
        (status = 201, description = "Link created; body is the new link id", body = i32,
            headers(("Location" = String, description = "URL of the new link"))),
        (status = 400, description = "Unreadable body, invalid request, link name already in use, invalid order IDs, orders with different product symbols or sub-account IDs, orders already linked, or store failure", body = String, content_type = "text/plain")
    ),
    tag = "Order Linking"
)]
pub async fn create_order_link(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Option<CreateLinkRequest>>, JsonRejection>,
) -> Result<CreatedLink, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        warn!("Rejected order link body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;
    let request = body.unwrap_or_default();

    let link_id = linking::create_link(
        state.store.as_ref(),
        request.link_name.as_deref().unwrap_or_default(),
        request.order_ids.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/orderlinking/{}", link_id))],
        Json(link_id),
    ))
}

/// List every order link.
#[utoipa::path(
    get,
    path = "/orderlinking/links",
    responses(
        (status = 200, description = "All order links", body = Vec<OrderLinkSummary>),
        (status = 400, description = "Store read failed", body = String, content_type = "text/plain")
    ),
    tag = "Order Linking"
)]
pub async fn list_order_links(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OrderLinkSummary>>, ApiError> {
    let links = state.store.list_links().await.map_err(|e| {
        warn!("Failed to list order links: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(links.into_iter().map(OrderLinkSummary::from).collect()))
}

/// Get an order link with its member orders.
#[utoipa::path(
    get,
    path = "/orderlinking/{link_id}",
    params(
        ("link_id" = i32, Path, description = "Order link ID")
    ),
    responses(
        (status = 200, description = "Order link details", body = OrderLinkDetail),
        (status = 400, description = "Store read failed", body = String, content_type = "text/plain"),
        (status = 404, description = "Order link not found", body = String, content_type = "text/plain")
    ),
    tag = "Order Linking"
)]
pub async fn get_order_link(
    State(state): State<Arc<AppState>>,
    Path(link_id): Path<LinkId>,
) -> Result<Json<OrderLinkDetail>, ApiError> {
    let linked = state
        .store
        .get_link(link_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("order link {}", link_id)))?;

    Ok(Json(OrderLinkDetail::from(linked)))
}

// ============================================================================
// Orders
// ============================================================================

/// List a summary of every order.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Order summaries", body = Vec<OrderSummary>),
        (status = 500, description = "Store read failed", body = String, content_type = "text/plain")
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OrderSummary>>, ApiError> {
    let records = state.store.order_records().await.map_err(|e| {
        error!("Failed to load orders: {}", e);
        ApiError::Internal(e.to_string())
    })?;

    Ok(Json(summary::project(records)))
}
