//! Unit tests for client module.

use super::*;

// ============================================================================
// ClientConfig Tests
// ============================================================================

#[test]
fn test_client_config_default() {
    let config = ClientConfig::default();

    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn test_client_config_custom() {
    let config = ClientConfig {
        base_url: "http://api.example.com:9000".to_string(),
        timeout: Duration::from_secs(60),
    };

    assert_eq!(config.base_url, "http://api.example.com:9000");
    assert_eq!(config.timeout, Duration::from_secs(60));
}

// ============================================================================
// MatchbookClient Creation Tests
// ============================================================================

#[test]
fn test_matchbook_client_new() {
    let client = MatchbookClient::new(ClientConfig::default());

    assert!(client.is_ok());
}

#[test]
fn test_matchbook_client_with_base_url() {
    let client = MatchbookClient::with_base_url("http://localhost:3000");

    assert!(client.is_ok());
}

#[test]
fn test_matchbook_client_rejects_invalid_url() {
    let result = MatchbookClient::with_base_url("localhost without scheme");

    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[test]
fn test_matchbook_client_base_url_trimmed() {
    let client = MatchbookClient::with_base_url("http://localhost:8080/").unwrap();

    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[test]
fn test_matchbook_client_link_url() {
    let client = MatchbookClient::with_base_url("https://api.example.com/").unwrap();

    assert_eq!(client.link_url(12), "https://api.example.com/orderlinking/12");
}
