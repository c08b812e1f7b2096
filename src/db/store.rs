//! Storage abstraction shared by the PostgreSQL and in-memory backends.

use crate::config::{OrderSeed, ProductSeed};
use crate::db::{LinkId, LinkedOrders, OrderId, OrderLink, OrderRecord};
use crate::linking::LinkError;
use async_trait::async_trait;

/// Store error types.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database driver error.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A schema constraint rejected the write.
    #[error("{0}")]
    Constraint(String),
}

/// Persistent store for orders, order links and product reference data.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Validates and creates a link as one atomic unit.
    ///
    /// Implementations must check the name with
    /// [`check_name_available`](crate::linking::check_name_available), resolve
    /// `order_ids` in ascending id order, run
    /// [`check_candidates`](crate::linking::check_candidates), then insert the
    /// link and point every resolved order at it. Either everything commits or
    /// nothing does.
    async fn create_link(&self, name: &str, order_ids: &[OrderId]) -> Result<LinkId, LinkError>;

    /// Returns every link ordered by id.
    async fn list_links(&self) -> Result<Vec<OrderLink>, StoreError>;

    /// Returns a link and its member order ids.
    async fn get_link(&self, id: LinkId) -> Result<Option<LinkedOrders>, StoreError>;

    /// Returns every order with its product specification, ordered by id.
    async fn order_records(&self) -> Result<Vec<OrderRecord>, StoreError>;

    /// Inserts reference products and orders, skipping rows that already exist.
    async fn seed(&self, products: &[ProductSeed], orders: &[OrderSeed]) -> Result<(), StoreError>;
}
