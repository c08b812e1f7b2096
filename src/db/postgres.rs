//! PostgreSQL order store.

use crate::config::{OrderSeed, ProductSeed};
use crate::db::{
    DatabasePool, LinkId, LinkedOrders, Order, OrderId, OrderLink, OrderRecord, OrderStore,
    StoreError,
};
use crate::linking::{LinkError, check_candidates, check_name_available};
use async_trait::async_trait;
use tracing::info;

/// Order store backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgOrderStore {
    db: DatabasePool,
}

impl PgOrderStore {
    /// Creates a store over an established pool.
    #[must_use]
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn create_link(&self, name: &str, order_ids: &[OrderId]) -> Result<LinkId, LinkError> {
        // Dropping the transaction on an early return rolls it back.
        let mut tx = self.db.pool().begin().await.map_err(StoreError::from)?;

        let (name_in_use,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM order_links WHERE name = $1)")
                .bind(name)
                .fetch_one(&mut *tx)
                .await
                .map_err(StoreError::from)?;
        check_name_available(name_in_use)?;

        // Row locks keep concurrent requests from linking the same orders.
        let resolved: Vec<Order> = sqlx::query_as(
            r#"
            SELECT id, product_symbol, sub_account_id, price, quantity, link_id
            FROM orders
            WHERE id = ANY($1)
            ORDER BY id
            FOR UPDATE
            "#,
        )
        .bind(order_ids)
        .fetch_all(&mut *tx)
        .await
        .map_err(StoreError::from)?;
        check_candidates(order_ids, &resolved)?;

        let (link_id,): (LinkId,) =
            sqlx::query_as("INSERT INTO order_links (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(&mut *tx)
                .await
                .map_err(StoreError::from)?;

        let resolved_ids: Vec<OrderId> = resolved.iter().map(|order| order.id).collect();
        sqlx::query("UPDATE orders SET link_id = $1 WHERE id = ANY($2)")
            .bind(link_id)
            .bind(&resolved_ids)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::from)?;

        tx.commit().await.map_err(StoreError::from)?;

        Ok(link_id)
    }

    async fn list_links(&self) -> Result<Vec<OrderLink>, StoreError> {
        let links: Vec<OrderLink> = sqlx::query_as("SELECT id, name FROM order_links ORDER BY id")
            .fetch_all(self.db.pool())
            .await?;
        Ok(links)
    }

    async fn get_link(&self, id: LinkId) -> Result<Option<LinkedOrders>, StoreError> {
        let link: Option<OrderLink> =
            sqlx::query_as("SELECT id, name FROM order_links WHERE id = $1")
                .bind(id)
                .fetch_optional(self.db.pool())
                .await?;

        let Some(link) = link else {
            return Ok(None);
        };

        let order_ids: Vec<(OrderId,)> =
            sqlx::query_as("SELECT id FROM orders WHERE link_id = $1 ORDER BY id")
                .bind(id)
                .fetch_all(self.db.pool())
                .await?;

        Ok(Some(LinkedOrders {
            link,
            order_ids: order_ids.into_iter().map(|(id,)| id).collect(),
        }))
    }

    async fn order_records(&self) -> Result<Vec<OrderRecord>, StoreError> {
        let records: Vec<OrderRecord> = sqlx::query_as(
            r#"
            SELECT o.id, o.product_symbol, o.sub_account_id, o.price, o.quantity,
                   s.price_quote_currency AS currency,
                   s.contract_uom AS unit_of_measure
            FROM orders o
            LEFT JOIN products p ON p.symbol = o.product_symbol
            LEFT JOIN product_specifications s ON s.id = p.specification_id
            ORDER BY o.id
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;
        Ok(records)
    }

    async fn seed(&self, products: &[ProductSeed], orders: &[OrderSeed]) -> Result<(), StoreError> {
        let mut tx = self.db.pool().begin().await?;

        for product in products {
            let (exists,): (bool,) =
                sqlx::query_as("SELECT EXISTS (SELECT 1 FROM products WHERE symbol = $1)")
                    .bind(&product.symbol)
                    .fetch_one(&mut *tx)
                    .await?;
            if exists {
                continue;
            }

            let specification_id: Option<i32> =
                if product.currency.is_some() || product.unit_of_measure.is_some() {
                    let (id,): (i32,) = sqlx::query_as(
                        r#"
                        INSERT INTO product_specifications (price_quote_currency, contract_uom)
                        VALUES ($1, $2)
                        RETURNING id
                        "#,
                    )
                    .bind(&product.currency)
                    .bind(&product.unit_of_measure)
                    .fetch_one(&mut *tx)
                    .await?;
                    Some(id)
                } else {
                    None
                };

            sqlx::query("INSERT INTO products (symbol, specification_id) VALUES ($1, $2)")
                .bind(&product.symbol)
                .bind(specification_id)
                .execute(&mut *tx)
                .await?;
        }

        for order in orders {
            sqlx::query(
                r#"
                INSERT INTO orders (id, product_symbol, sub_account_id, price, quantity)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(order.id)
            .bind(&order.product_symbol)
            .bind(order.sub_account_id)
            .bind(order.price)
            .bind(order.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(
            "Seeded database with {} products and {} orders",
            products.len(),
            orders.len()
        );
        Ok(())
    }
}
