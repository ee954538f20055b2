//! reqwest-based greeting client.
//!
//! Calls the upstream service's /ft/hello endpoint and passes the body
//! through unchanged. Retry, timeout, and circuit-breaking policy is
//! configured outside this crate.

use async_trait::async_trait;
use relay_core::{ClientError, HelloClient};
use reqwest::Client;

/// Greeting client that calls the upstream service over HTTP.
pub struct RestHelloClient {
    client: Client,
    base_url: String,
}

impl RestHelloClient {
    /// Creates a client for the given upstream base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl HelloClient for RestHelloClient {
    async fn hello(&self) -> Result<String, ClientError> {
        let url = format!("{}/ft/hello", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::Body(e.to_string()))
    }
}
