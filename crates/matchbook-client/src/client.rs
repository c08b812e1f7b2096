//! HTTP client for the Matchbook API.

use crate::error::Error;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;
use url::Url;

#[cfg(test)]
mod tests;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Matchbook API.
#[derive(Debug, Clone)]
pub struct MatchbookClient {
    client: Client,
    base_url: String,
}

impl MatchbookClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Url::parse(&config.base_url)?;
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a link returned in a `Location` header.
    #[must_use]
    pub fn link_url(&self, link_id: i32) -> String {
        format!("{}/orderlinking/{}", self.base_url, link_id)
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Order Linking
    // ========================================================================

    /// Links the given orders under `link_name` and returns the new link id.
    ///
    /// # Errors
    /// Returns [`Error::Api`] with status 400 and the rejection reason when the
    /// link is refused.
    pub async fn create_link(&self, link_name: &str, order_ids: &[i64]) -> Result<i32, Error> {
        self.submit_link(&CreateLinkRequest {
            link_name: link_name.to_string(),
            order_ids: Some(order_ids.to_vec()),
        })
        .await
    }

    /// Submits a raw link request.
    ///
    /// # Errors
    /// Returns error if the request fails or the link is refused.
    pub async fn submit_link(&self, request: &CreateLinkRequest) -> Result<i32, Error> {
        let url = format!("{}/orderlinking", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Lists all order links.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_links(&self) -> Result<Vec<OrderLink>, Error> {
        let url = format!("{}/orderlinking/links", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Gets an order link with its member orders.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the link does not exist.
    pub async fn get_link(&self, link_id: i32) -> Result<OrderLinkDetail, Error> {
        let resp = self.client.get(self.link_url(link_id)).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Lists order summaries.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_orders(&self) -> Result<Vec<OrderSummary>, Error> {
        let url = format!("{}/orders", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else if status.as_u16() == 404 {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::NotFound(text))
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
