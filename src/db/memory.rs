//! In-memory order store.
//!
//! Used when no database is configured and by unit tests. A single write lock
//! covers each link creation, which makes the check-then-save sequence atomic.

use crate::config::{OrderSeed, ProductSeed};
use crate::db::{
    LinkId, LinkedOrders, MAX_LINK_NAME_LEN, Order, OrderId, OrderLink, OrderRecord, OrderStore,
    Product, ProductSpecification, StoreError,
};
use crate::linking::{LinkError, check_candidates, check_name_available};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[derive(Debug, Default)]
struct Tables {
    orders: BTreeMap<OrderId, Order>,
    links: BTreeMap<LinkId, OrderLink>,
    products: HashMap<String, Product>,
    specifications: BTreeMap<i32, ProductSpecification>,
}

impl Tables {
    fn next_link_id(&self) -> LinkId {
        self.links.keys().next_back().map_or(1, |id| id + 1)
    }

    fn next_specification_id(&self) -> i32 {
        self.specifications.keys().next_back().map_or(1, |id| id + 1)
    }

    fn insert_product(&mut self, seed: &ProductSeed) {
        if self.products.contains_key(&seed.symbol) {
            return;
        }

        let specification_id = if seed.currency.is_some() || seed.unit_of_measure.is_some() {
            let id = self.next_specification_id();
            self.specifications.insert(
                id,
                ProductSpecification {
                    id,
                    price_quote_currency: seed.currency.clone(),
                    contract_uom: seed.unit_of_measure.clone(),
                },
            );
            Some(id)
        } else {
            None
        };

        self.products.insert(
            seed.symbol.clone(),
            Product {
                symbol: seed.symbol.clone(),
                specification_id,
            },
        );
    }

    fn specification_for(&self, symbol: &str) -> Option<&ProductSpecification> {
        self.products
            .get(symbol)
            .and_then(|product| product.specification_id)
            .and_then(|id| self.specifications.get(&id))
    }
}

/// Order store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store populated with reference data.
    #[must_use]
    pub fn with_seed(products: &[ProductSeed], orders: &[OrderSeed]) -> Self {
        let store = Self::new();
        store.load_seed(products, orders);
        store
    }

    /// Inserts or replaces an order.
    pub fn insert_order(&self, order: Order) {
        self.tables.write().orders.insert(order.id, order);
    }

    /// Inserts a link without touching any order and returns its id.
    pub fn insert_link(&self, name: &str) -> LinkId {
        let mut tables = self.tables.write();
        let id = tables.next_link_id();
        tables.links.insert(
            id,
            OrderLink {
                id,
                name: name.to_string(),
            },
        );
        id
    }

    /// Returns a copy of an order.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<Order> {
        self.tables.read().orders.get(&id).cloned()
    }

    /// Number of links currently stored.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.tables.read().links.len()
    }

    fn load_seed(&self, products: &[ProductSeed], orders: &[OrderSeed]) {
        let mut tables = self.tables.write();
        for product in products {
            tables.insert_product(product);
        }
        for seed in orders {
            tables.orders.entry(seed.id).or_insert_with(|| seed.to_order());
        }
        debug!(
            "Seeded memory store with {} products and {} orders",
            tables.products.len(),
            tables.orders.len()
        );
    }
}

/// Mirrors the `order_links.name` column constraints.
fn check_link_name(name: &str) -> Result<(), StoreError> {
    let len = name.chars().count();
    if len == 0 {
        return Err(StoreError::Constraint(
            "new row for relation \"order_links\" violates check constraint \"order_links_name_check\""
                .to_string(),
        ));
    }
    if len > MAX_LINK_NAME_LEN {
        return Err(StoreError::Constraint(format!(
            "value too long for type character varying({MAX_LINK_NAME_LEN})"
        )));
    }
    Ok(())
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn create_link(&self, name: &str, order_ids: &[OrderId]) -> Result<LinkId, LinkError> {
        let mut tables = self.tables.write();

        check_name_available(tables.links.values().any(|link| link.name == name))?;

        let resolved: Vec<Order> = tables
            .orders
            .values()
            .filter(|order| order_ids.contains(&order.id))
            .cloned()
            .collect();
        check_candidates(order_ids, &resolved)?;

        check_link_name(name)?;

        let link_id = tables.next_link_id();
        tables.links.insert(
            link_id,
            OrderLink {
                id: link_id,
                name: name.to_string(),
            },
        );
        for order in &resolved {
            if let Some(stored) = tables.orders.get_mut(&order.id) {
                stored.link_id = Some(link_id);
            }
        }

        Ok(link_id)
    }

    async fn list_links(&self) -> Result<Vec<OrderLink>, StoreError> {
        Ok(self.tables.read().links.values().cloned().collect())
    }

    async fn get_link(&self, id: LinkId) -> Result<Option<LinkedOrders>, StoreError> {
        let tables = self.tables.read();
        Ok(tables.links.get(&id).map(|link| LinkedOrders {
            link: link.clone(),
            order_ids: tables
                .orders
                .values()
                .filter(|order| order.link_id == Some(id))
                .map(|order| order.id)
                .collect(),
        }))
    }

    async fn order_records(&self) -> Result<Vec<OrderRecord>, StoreError> {
        let tables = self.tables.read();
        Ok(tables
            .orders
            .values()
            .map(|order| {
                let specification = tables.specification_for(&order.product_symbol);
                OrderRecord {
                    id: order.id,
                    product_symbol: order.product_symbol.clone(),
                    sub_account_id: order.sub_account_id,
                    price: order.price,
                    quantity: order.quantity,
                    currency: specification.and_then(|s| s.price_quote_currency.clone()),
                    unit_of_measure: specification.and_then(|s| s.contract_uom.clone()),
                }
            })
            .collect())
    }

    async fn seed(&self, products: &[ProductSeed], orders: &[OrderSeed]) -> Result<(), StoreError> {
        self.load_seed(products, orders);
        Ok(())
    }
}
