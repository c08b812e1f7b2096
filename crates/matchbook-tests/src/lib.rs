//! Integration tests for the Matchbook API.
//!
//! These tests require the API server to be running with the sample
//! configuration (`config/matchbook.toml`). Configure the server URL via the
//! `API_BASE_URL` environment variable (default: `http://localhost:8080`).
//!
//! Link creation mutates the seeded orders, so tests that need unlinked orders
//! skip themselves once those orders have been linked by an earlier run.

use matchbook_client::{ClientConfig, MatchbookClient, OrderSummary};
use std::time::Duration;

/// Gets the API base URL from environment or uses default.
#[must_use]
pub fn get_api_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Creates a test client configured for the API.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client() -> Result<MatchbookClient, matchbook_client::Error> {
    MatchbookClient::new(ClientConfig {
        base_url: get_api_url(),
        timeout: Duration::from_secs(10),
    })
}

/// Generates a unique link name to avoid conflicts between tests.
#[must_use]
pub fn unique_name(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

    format!("{}_{}_{}", prefix, ts, counter)
}

/// Returns an id no seeded order uses.
#[must_use]
pub fn missing_order_id(orders: &[OrderSummary]) -> i64 {
    orders.iter().map(|o| o.id).max().unwrap_or(0) + 1
}
