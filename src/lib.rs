//! # Matchbook Backend - REST API Server
//!
//! A small back-office service that groups ("links") resting orders under a
//! shared name and lists order summaries. Built with
//! [Axum](https://crates.io/crates/axum) for async HTTP handling,
//! [SQLx](https://crates.io/crates/sqlx) for PostgreSQL persistence, and
//! OpenAPI/Swagger documentation via [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Key Features
//!
//! - **Order Linking**: Validates and creates named groups of two or more
//!   orders sharing a product symbol and sub-account.
//!
//! - **Atomic Writes**: Validation and the link write run in one transaction,
//!   with the candidate orders locked until commit.
//!
//! - **Order Summaries**: Flattened order listing enriched with the product's
//!   quote currency and unit of measure.
//!
//! - **Pluggable Storage**: PostgreSQL when a database URL is configured,
//!   otherwise an in-memory store seeded from the configuration file.
//!
//! - **OpenAPI Documentation**: Swagger UI at `/swagger-ui/`.
//!
//! ## Linking Rules
//!
//! Checks run in this order and the first failure is reported:
//!
//! | Check | Rejection |
//! |-------|-----------|
//! | At least two order ids | `Invalid request` |
//! | Name not used by another link | `Link name is already in use` |
//! | Every id resolves to one order | `Invalid order IDs` |
//! | Same product symbol and sub-account | `Orders have different product symbols or sub-account IDs` |
//! | No order already linked | `Orders are already linked` |
//!
//! Store failures are reported with the store's own message.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers and router configuration |
//! | [`config`] | TOML configuration and seed data |
//! | [`db`] | Store trait with PostgreSQL and in-memory backends |
//! | [`error`] | API error type with `IntoResponse` implementation |
//! | [`linking`] | Link validation rules |
//! | [`models`] | Request/response DTOs with OpenAPI schemas |
//! | [`state`] | Application state management |
//! | [`summary`] | Order summary projection |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/orderlinking` | Link orders |
//! | GET | `/orderlinking/links` | List all links |
//! | GET | `/orderlinking/{id}` | Get a link with its orders |
//! | GET | `/orders` | List order summaries |
//!
//! ## Example Usage
//!
//! ```bash
//! # In-memory store seeded from config/matchbook.toml
//! cargo run
//!
//! # PostgreSQL
//! DATABASE_URL=postgres://localhost/matchbook cargo run
//!
//! # Link two orders
//! curl -X POST http://localhost:8080/orderlinking \
//!   -H "Content-Type: application/json" \
//!   -d '{"linkName": "Crude spread", "orderIds": [1, 2]}'
//!
//! # List links
//! curl http://localhost:8080/orderlinking/links
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod linking;
pub mod models;
pub mod state;
pub mod summary;
