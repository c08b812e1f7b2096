//! Unit tests for linking module.

use super::*;
use crate::db::MemoryStore;
use rust_decimal_macros::dec;

fn order(id: OrderId, symbol: &str, sub_account_id: i32, link_id: Option<LinkId>) -> Order {
    Order {
        id,
        product_symbol: symbol.to_string(),
        sub_account_id,
        price: dec!(100.0),
        quantity: 1,
        link_id,
    }
}

// ============================================================================
// LinkError Display Tests
// ============================================================================

#[test]
fn test_link_error_messages() {
    assert_eq!(LinkError::InvalidRequest.to_string(), "Invalid request");
    assert_eq!(LinkError::NameInUse.to_string(), "Link name is already in use");
    assert_eq!(LinkError::InvalidOrderIds.to_string(), "Invalid order IDs");
    assert_eq!(
        LinkError::MixedOrders.to_string(),
        "Orders have different product symbols or sub-account IDs"
    );
    assert_eq!(LinkError::AlreadyLinked.to_string(), "Orders are already linked");
    assert_eq!(
        LinkError::Store("connection refused".to_string()).to_string(),
        "connection refused"
    );
}

#[test]
fn test_link_error_from_store_error() {
    let err = LinkError::from(StoreError::Constraint("duplicate key".to_string()));
    assert_eq!(err, LinkError::Store("duplicate key".to_string()));
}

// ============================================================================
// check_request Tests
// ============================================================================

#[test]
fn test_check_request_rejects_missing_ids() {
    assert_eq!(check_request(None), Err(LinkError::InvalidRequest));
}

#[test]
fn test_check_request_rejects_short_lists() {
    assert_eq!(check_request(Some(&[])), Err(LinkError::InvalidRequest));
    assert_eq!(check_request(Some(&[1])), Err(LinkError::InvalidRequest));
}

#[test]
fn test_check_request_accepts_two_or_more() {
    assert_eq!(check_request(Some(&[1, 2])), Ok(&[1, 2][..]));
    assert_eq!(check_request(Some(&[3, 2, 1])), Ok(&[3, 2, 1][..]));
}

// ============================================================================
// check_candidates Tests
// ============================================================================

#[test]
fn test_check_candidates_missing_order() {
    let resolved = vec![order(1, "AAPL", 1, None), order(2, "AAPL", 1, None)];
    assert_eq!(
        check_candidates(&[1, 2, 3], &resolved),
        Err(LinkError::InvalidOrderIds)
    );
}

#[test]
fn test_check_candidates_duplicate_ids_under_resolve() {
    let resolved = vec![order(1, "AAPL", 1, None)];
    assert_eq!(
        check_candidates(&[1, 1], &resolved),
        Err(LinkError::InvalidOrderIds)
    );
}

#[test]
fn test_check_candidates_different_symbols() {
    let resolved = vec![order(1, "AAPL", 1, None), order(2, "GOOG", 1, None)];
    assert_eq!(
        check_candidates(&[1, 2], &resolved),
        Err(LinkError::MixedOrders)
    );
}

#[test]
fn test_check_candidates_different_sub_accounts() {
    let resolved = vec![
        order(1, "AAPL", 1, None),
        order(2, "AAPL", 1, None),
        order(3, "AAPL", 2, None),
    ];
    assert_eq!(
        check_candidates(&[1, 2, 3], &resolved),
        Err(LinkError::MixedOrders)
    );
}

#[test]
fn test_check_candidates_already_linked() {
    let resolved = vec![order(1, "AAPL", 1, Some(1)), order(2, "AAPL", 1, Some(1))];
    assert_eq!(
        check_candidates(&[1, 2], &resolved),
        Err(LinkError::AlreadyLinked)
    );
}

#[test]
fn test_check_candidates_one_linked_order_is_enough() {
    let resolved = vec![order(1, "AAPL", 1, None), order(2, "AAPL", 1, Some(4))];
    assert_eq!(
        check_candidates(&[1, 2], &resolved),
        Err(LinkError::AlreadyLinked)
    );
}

#[test]
fn test_check_candidates_mixed_wins_over_linked() {
    let resolved = vec![order(1, "AAPL", 1, Some(1)), order(2, "GOOG", 1, None)];
    assert_eq!(
        check_candidates(&[1, 2], &resolved),
        Err(LinkError::MixedOrders)
    );
}

#[test]
fn test_check_candidates_eligible() {
    let resolved = vec![order(2, "AAPL", 1, None), order(1, "AAPL", 1, None)];
    assert_eq!(check_candidates(&[1, 2], &resolved), Ok(()));
}

// ============================================================================
// create_link Tests
// ============================================================================

#[tokio::test]
async fn test_create_link_invalid_request_ignores_name() {
    let store = MemoryStore::new();
    store.insert_link("taken");

    let result = create_link(&store, "taken", Some(&[1])).await;

    assert_eq!(result, Err(LinkError::InvalidRequest));
}

#[tokio::test]
async fn test_create_link_name_in_use_before_order_checks() {
    let store = MemoryStore::new();
    store.insert_order(order(1, "AAPL", 1, None));
    store.insert_order(order(2, "AAPL", 2, None));
    store.insert_link("Test Link");

    let result = create_link(&store, "Test Link", Some(&[1, 2, 3])).await;

    assert_eq!(result, Err(LinkError::NameInUse));
}

#[tokio::test]
async fn test_create_link_name_match_is_case_sensitive() {
    let store = MemoryStore::new();
    store.insert_order(order(1, "AAPL", 1, None));
    store.insert_order(order(2, "AAPL", 1, None));
    store.insert_link("test link");

    let result = create_link(&store, "Test Link", Some(&[1, 2])).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_link_success() {
    let store = MemoryStore::new();
    store.insert_order(order(1, "AAPL", 1, None));
    store.insert_order(order(2, "AAPL", 1, None));

    let link_id = create_link(&store, "Test Link", Some(&[1, 2]))
        .await
        .unwrap();

    assert_eq!(store.order(1).unwrap().link_id, Some(link_id));
    assert_eq!(store.order(2).unwrap().link_id, Some(link_id));
    assert_eq!(store.link_count(), 1);
}

#[tokio::test]
async fn test_create_link_retry_hits_name_check() {
    let store = MemoryStore::new();
    store.insert_order(order(1, "AAPL", 1, None));
    store.insert_order(order(2, "AAPL", 1, None));

    create_link(&store, "Pair", Some(&[1, 2])).await.unwrap();
    let retry = create_link(&store, "Pair", Some(&[1, 2])).await;

    assert_eq!(retry, Err(LinkError::NameInUse));
    assert_eq!(store.link_count(), 1);
}
