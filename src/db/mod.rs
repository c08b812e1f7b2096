//! Persistence for orders, order links and product reference data.

mod memory;
mod pool;
mod postgres;
mod schema;
mod store;

pub use memory::MemoryStore;
pub use pool::DatabasePool;
pub use postgres::PgOrderStore;
pub use schema::*;
pub use store::{OrderStore, StoreError};
