//! Customer API REST client
//!
//! reqwest-based implementation of [`PortalApi`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::{endpoints, PortalApi, DEFAULT_API_BASE};
use crate::error::{PortalError, PortalResult};
use crate::models::{CustomerKey, CustomerList, CustomerMetrics, CustomerRecord};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the customer API (e.g., "http://localhost:8000/api")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// Customer API client over HTTP
pub struct HttpPortalApi {
    client: Client,
    config: ApiConfig,
}

impl HttpPortalApi {
    pub fn new(config: ApiConfig) -> PortalResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| PortalError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> PortalResult<T> {
        let request_id = uuid::Uuid::new_v4();
        tracing::debug!(request_id = %request_id, url = %url, "GET");

        let response = self
            .client
            .get(url)
            .header("X-Request-Id", request_id.to_string())
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        tracing::debug!(request_id = %request_id, status = status.as_u16(), "Response received");

        if status == StatusCode::NOT_FOUND {
            return Err(PortalError::NotFound);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PortalError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(classify)?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(request_id = %request_id, error = %e, "Malformed response body");
            PortalError::Decode(e.to_string())
        })
    }
}

fn classify(e: reqwest::Error) -> PortalError {
    if e.is_timeout() {
        PortalError::Timeout
    } else {
        PortalError::Transport(e.to_string())
    }
}

#[async_trait]
impl PortalApi for HttpPortalApi {
    async fn find_customer_by_phone(&self, phone: &str) -> PortalResult<CustomerRecord> {
        let url = endpoints::customer_by_phone(&self.config.base_url, phone);
        self.get_json(&url).await
    }

    async fn get_metrics_for_customer(&self, key: &CustomerKey) -> PortalResult<CustomerMetrics> {
        let url = endpoints::customer_metrics(&self.config.base_url, key);
        self.get_json(&url).await
    }

    async fn get_customers(&self) -> PortalResult<CustomerList> {
        let url = endpoints::customers(&self.config.base_url);
        self.get_json(&url).await
    }
}
