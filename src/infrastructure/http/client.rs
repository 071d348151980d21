use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::domain::errors::ApiError;
use crate::domain::models::{Ack, ApiConfig, Collection};
use crate::domain::ports::SectionClient;

/// Configuration for the HTTP section client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the section service
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for HttpClientConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.clone(),
            timeout_secs: api.timeout_secs,
        }
    }
}

/// reqwest-backed implementation of [`SectionClient`]
///
/// Issues each call exactly once. Retrying is left to the callers: the
/// polling scheduler re-reads on its own cadence and deletes are never
/// retried.
pub struct HttpSectionClient {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,

    /// Base URL without trailing slash
    base_url: String,
}

impl HttpSectionClient {
    /// Create a client with custom configuration
    ///
    /// # Returns
    /// * `Ok(HttpSectionClient)` - Successfully created client
    /// * `Err(ApiError::Network)` - Failed to build the underlying HTTP client
    pub fn with_config(config: HttpClientConfig) -> Result<Self, ApiError> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(4)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn sections_url(&self, house_id: &str) -> String {
        format!("{}/houses/{}/sections", self.base_url, house_id)
    }

    /// Turn a non-success response into a rejection carrying its body.
    async fn reject(response: Response) -> ApiError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error response".to_string());
        ApiError::rejected(status.as_u16(), body)
    }
}

fn map_transport_error(err: &reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(err.to_string())
    }
}

#[async_trait]
impl SectionClient for HttpSectionClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn list(&self, house_id: &str) -> Result<Collection, ApiError> {
        let response = self
            .http_client
            .get(self.sections_url(house_id))
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        if !response.status().is_success() {
            let err = Self::reject(response).await;
            warn!(error = %err, "List request rejected");
            return Err(err);
        }

        let collection: Collection = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        debug!(count = collection.len(), "Listed house sections");
        Ok(collection)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn remove(&self, house_id: &str, section_id: &str) -> Result<Ack, ApiError> {
        let response = self
            .http_client
            .delete(format!("{}/{}", self.sections_url(house_id), section_id))
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::reject(response).await);
        }

        debug!(status = status.as_u16(), "Delete acknowledged");
        Ok(Ack {
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = HttpSectionClient::with_config(HttpClientConfig {
            base_url: "http://example.test/api/".to_string(),
            timeout_secs: 5,
        })
        .unwrap();

        assert_eq!(
            client.sections_url("h1"),
            "http://example.test/api/houses/h1/sections"
        );
    }

    #[test]
    fn test_config_from_api_config() {
        let config = HttpClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 30);
    }
}
