//! Request and response models for the REST API.

use crate::db::{LinkId, LinkedOrders, OrderId, OrderLink};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Request to link orders under a shared name.
///
/// Both fields may be absent or null; a missing `orderIds` is rejected as an
/// invalid request and a missing `linkName` is treated as empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// Name of the new link.
    #[serde(default)]
    pub link_name: Option<String>,
    /// Orders to link; at least two.
    #[serde(default)]
    pub order_ids: Option<Vec<OrderId>>,
}

/// Order link as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderLinkSummary {
    /// Link identifier.
    pub id: LinkId,
    /// Link name.
    pub name: String,
}

impl From<OrderLink> for OrderLinkSummary {
    fn from(link: OrderLink) -> Self {
        Self {
            id: link.id,
            name: link.name,
        }
    }
}

/// Order link with its member orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLinkDetail {
    /// Link identifier.
    pub id: LinkId,
    /// Link name.
    pub name: String,
    /// Linked order ids in ascending order.
    pub order_ids: Vec<OrderId>,
}

impl From<LinkedOrders> for OrderLinkDetail {
    fn from(linked: LinkedOrders) -> Self {
        Self {
            id: linked.link.id,
            name: linked.link.name,
            order_ids: linked.order_ids,
        }
    }
}

/// Flattened order view for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Order identifier.
    pub id: OrderId,
    /// Product symbol.
    pub product_symbol: String,
    /// Limit price.
    #[schema(value_type = f64)]
    pub price: Decimal,
    /// Price quote currency; null when the product has no specification.
    pub currency: Option<String>,
    /// Order quantity.
    pub quantity: i32,
    /// Contract unit of measure; null when the product has no specification.
    pub unit_of_measure: Option<String>,
    /// Owning sub-account.
    pub sub_account: i32,
}
