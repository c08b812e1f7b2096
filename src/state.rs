//! Application state management.

use crate::config::Config;
use crate::db::{DatabasePool, MemoryStore, OrderStore, PgOrderStore};
use std::sync::Arc;
use tracing::info;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Order and link storage.
    pub store: Arc<dyn OrderStore>,
    /// Application configuration.
    pub config: Option<Config>,
}

impl AppState {
    /// Creates a new application state over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Creates a new application state over the given store.
    #[must_use]
    pub fn with_store(store: Arc<dyn OrderStore>) -> Self {
        Self {
            store,
            config: None,
        }
    }

    /// Creates a new application state from configuration.
    ///
    /// With a database the store is PostgreSQL and seeding is left to the
    /// caller; without one, an in-memory store is seeded from the config.
    #[must_use]
    pub fn from_config(config: Config, db: Option<DatabasePool>) -> Self {
        let store: Arc<dyn OrderStore> = match db {
            Some(db) => Arc::new(PgOrderStore::new(db)),
            None => {
                info!(
                    "Using in-memory store with {} products and {} orders",
                    config.products.len(),
                    config.orders.len()
                );
                Arc::new(MemoryStore::with_seed(&config.products, &config.orders))
            }
        };

        Self {
            store,
            config: Some(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_config_seeds_memory_store() {
        let config = Config::parse(
            r#"
[[products]]
symbol = "CL"
currency = "USD"
unit_of_measure = "barrels"

[[orders]]
id = 1
product_symbol = "CL"
sub_account_id = 1
price = 70.0
quantity = 1

[[orders]]
id = 2
product_symbol = "CL"
sub_account_id = 1
price = 71.0
quantity = 2
"#,
        )
        .expect("should parse");

        let state = AppState::from_config(config, None);
        let records = state.store.order_records().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].currency.as_deref(), Some("USD"));
        assert!(state.config.is_some());
    }

    #[tokio::test]
    async fn test_new_state_is_empty() {
        let state = AppState::new();

        assert!(state.store.list_links().await.unwrap().is_empty());
        assert!(state.store.order_records().await.unwrap().is_empty());
    }
}
