//! Order linking rules.
//!
//! A link groups two or more resting orders under a unique name. Creating one
//! runs a fixed sequence of checks and stops at the first failure:
//!
//! 1. the request carries at least two order ids,
//! 2. no existing link already uses the name,
//! 3. every requested id resolves to exactly one order,
//! 4. all resolved orders share the product symbol and sub-account of the
//!    first resolved order,
//! 5. none of the resolved orders is already linked.
//!
//! Step 1 runs here. Steps 2 to 5 run inside the store's atomic section via
//! [`check_name_available`] and [`check_candidates`], so that validation and the
//! write observe the same state.

use crate::db::{LinkId, Order, OrderId, OrderStore, StoreError};
use tracing::{info, warn};

#[cfg(test)]
mod tests;

/// Minimum number of orders in a link.
pub const MIN_LINKED_ORDERS: usize = 2;

/// Reasons a link cannot be created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    /// Missing or too short list of order ids.
    #[error("Invalid request")]
    InvalidRequest,

    /// Another link already has this name.
    #[error("Link name is already in use")]
    NameInUse,

    /// Some requested ids do not resolve to orders, or ids are repeated.
    #[error("Invalid order IDs")]
    InvalidOrderIds,

    /// Orders differ in product symbol or sub-account.
    #[error("Orders have different product symbols or sub-account IDs")]
    MixedOrders,

    /// At least one order already belongs to a link.
    #[error("Orders are already linked")]
    AlreadyLinked,

    /// The store failed; carries its message verbatim.
    #[error("{0}")]
    Store(String),
}

impl From<StoreError> for LinkError {
    fn from(err: StoreError) -> Self {
        LinkError::Store(err.to_string())
    }
}

/// Checks the shape of a link request.
///
/// # Errors
/// Returns [`LinkError::InvalidRequest`] when `order_ids` is absent or has fewer
/// than [`MIN_LINKED_ORDERS`] entries.
pub fn check_request(order_ids: Option<&[OrderId]>) -> Result<&[OrderId], LinkError> {
    match order_ids {
        Some(ids) if ids.len() >= MIN_LINKED_ORDERS => Ok(ids),
        _ => Err(LinkError::InvalidRequest),
    }
}

/// Fails when the requested link name is already taken.
///
/// # Errors
/// Returns [`LinkError::NameInUse`] if `name_in_use` is set.
pub fn check_name_available(name_in_use: bool) -> Result<(), LinkError> {
    if name_in_use {
        Err(LinkError::NameInUse)
    } else {
        Ok(())
    }
}

/// Checks the orders resolved for `requested` ids.
///
/// `resolved` is in store resolution order; its first element is the basis for
/// the symbol and sub-account comparison.
///
/// # Errors
/// Returns the first failing check among [`LinkError::InvalidOrderIds`],
/// [`LinkError::MixedOrders`] and [`LinkError::AlreadyLinked`].
pub fn check_candidates(requested: &[OrderId], resolved: &[Order]) -> Result<(), LinkError> {
    if resolved.len() != requested.len() {
        return Err(LinkError::InvalidOrderIds);
    }

    if let Some(first) = resolved.first() {
        let homogeneous = resolved.iter().all(|order| {
            order.product_symbol == first.product_symbol
                && order.sub_account_id == first.sub_account_id
        });
        if !homogeneous {
            return Err(LinkError::MixedOrders);
        }
    }

    if resolved.iter().any(Order::is_linked) {
        return Err(LinkError::AlreadyLinked);
    }

    Ok(())
}

/// Creates a link named `link_name` over `order_ids`.
///
/// # Errors
/// Returns the first failed check, or the store's error message if the atomic
/// save fails.
pub async fn create_link(
    store: &dyn OrderStore,
    link_name: &str,
    order_ids: Option<&[OrderId]>,
) -> Result<LinkId, LinkError> {
    let result = match check_request(order_ids) {
        Ok(ids) => store.create_link(link_name, ids).await,
        Err(err) => Err(err),
    };

    match &result {
        Ok(link_id) => info!(link_id, link_name, "Order link created"),
        Err(err) => warn!(link_name, reason = %err, "Order link rejected"),
    }

    result
}
