//! HTTP client library for the Matchbook order linking API.
//!
//! This crate provides a typed HTTP client for every REST endpoint of the
//! Matchbook backend.
//!
//! # Example
//!
//! ```no_run
//! use matchbook_client::{ClientConfig, MatchbookClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), matchbook_client::Error> {
//!     let client = MatchbookClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     let link_id = client.create_link("Crude spread", &[1, 2]).await?;
//!     println!("Created link {}", link_id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, MatchbookClient};
pub use error::Error;
pub use types::*;
