//! Request and response types for the Matchbook API.

use serde::{Deserialize, Serialize};


// ============================================================================
// Health
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

// ============================================================================
// Order Linking
// ============================================================================

/// Request to link orders under a shared name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// Name of the new link.
    pub link_name: String,
    /// Orders to link.
    pub order_ids: Option<Vec<i64>>,
}

/// Order link as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLink {
    /// Link identifier.
    pub id: i32,
    /// Link name.
    pub name: String,
}

/// Order link with its member orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLinkDetail {
    /// Link identifier.
    pub id: i32,
    /// Link name.
    pub name: String,
    /// Linked order ids.
    pub order_ids: Vec<i64>,
}

// ============================================================================
// Orders
// ============================================================================

/// Flattened order view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Order identifier.
    pub id: i64,
    /// Product symbol.
    pub product_symbol: String,
    /// Limit price.
    pub price: f64,
    /// Price quote currency.
    pub currency: Option<String>,
    /// Order quantity.
    pub quantity: i32,
    /// Contract unit of measure.
    pub unit_of_measure: Option<String>,
    /// Owning sub-account.
    pub sub_account: i32,
}
