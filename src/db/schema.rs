//! Database schema types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order identifier.
pub type OrderId = i64;

/// Order link identifier, assigned by the store.
pub type LinkId = i32;

/// Maximum length of an order link name.
pub const MAX_LINK_NAME_LEN: usize = 100;

/// Resting order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Unique identifier.
    pub id: OrderId,
    /// Symbol of the traded product.
    pub product_symbol: String,
    /// Owning sub-account.
    pub sub_account_id: i32,
    /// Limit price.
    pub price: Decimal,
    /// Order quantity.
    pub quantity: i32,
    /// Link this order belongs to, if any.
    pub link_id: Option<LinkId>,
}

impl Order {
    /// Returns true if the order already belongs to a link.
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.link_id.is_some()
    }
}

/// Named grouping of orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct OrderLink {
    /// Unique identifier.
    pub id: LinkId,
    /// Link name, unique across all links.
    pub name: String,
}

/// Product reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Product symbol.
    pub symbol: String,
    /// Specification row, if one is attached.
    pub specification_id: Option<i32>,
}

/// Display attributes of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ProductSpecification {
    /// Unique identifier.
    pub id: i32,
    /// Currency prices are quoted in.
    pub price_quote_currency: Option<String>,
    /// Contract unit of measure.
    pub contract_uom: Option<String>,
}

/// Order joined with its product specification.
///
/// `currency` and `unit_of_measure` are `None` when the order has no product
/// or the product has no specification.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct OrderRecord {
    /// Order identifier.
    pub id: OrderId,
    /// Symbol of the traded product.
    pub product_symbol: String,
    /// Owning sub-account.
    pub sub_account_id: i32,
    /// Limit price.
    pub price: Decimal,
    /// Order quantity.
    pub quantity: i32,
    /// Price quote currency from the product specification.
    pub currency: Option<String>,
    /// Contract unit of measure from the product specification.
    pub unit_of_measure: Option<String>,
}

/// Order link with the ids of its member orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedOrders {
    /// The link itself.
    pub link: OrderLink,
    /// Member order ids in ascending order.
    pub order_ids: Vec<OrderId>,
}
