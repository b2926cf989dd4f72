//! Health client for the backend's HTTP API.
//!
//! The backend exposes a single unauthenticated `GET /health` endpoint
//! returning a JSON [`HealthStatus`] report, plus a handful of informational
//! resources (`/docs`, `/system/info`, `/metrics`) that the dashboard only
//! ever links to, never fetches.

use std::time::Duration;

use reqwest::Client;

use trafficwatch_types::HealthStatus;

use crate::error::ClientError;

/// Client for the backend health endpoint.
#[derive(Debug, Clone)]
pub struct HealthClient {
    client: Client,
    base_url: String,
}

impl HealthClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> HealthClientBuilder {
        HealthClientBuilder::default()
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current health report.
    ///
    /// A non-2xx status is an error; the body is parsed as [`HealthStatus`]
    /// with no further validation.
    pub async fn fetch_health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.health_url();

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Http(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let health: HealthStatus = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        Ok(health)
    }

    /// URL of the health endpoint.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// URL of the interactive API documentation.
    pub fn docs_url(&self) -> String {
        format!("{}/docs", self.base_url)
    }

    /// URL of the system information endpoint.
    pub fn system_info_url(&self) -> String {
        format!("{}/system/info", self.base_url)
    }

    /// URL of the Prometheus metrics endpoint.
    pub fn metrics_url(&self) -> String {
        format!("{}/metrics", self.base_url)
    }
}

/// Builder for [`HealthClient`].
#[derive(Debug, Default)]
pub struct HealthClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl HealthClientBuilder {
    /// Set the backend base URL (e.g. "http://localhost:8000").
    ///
    /// A trailing slash is stripped so endpoint paths join cleanly.
    pub fn endpoint(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> HealthClient {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        HealthClient {
            client,
            base_url: self
                .base_url
                .unwrap_or_else(|| "http://localhost:8000".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = HealthClient::builder().build();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_builder_custom_endpoint() {
        let client = HealthClient::builder()
            .endpoint("http://traffic.local:9000")
            .timeout(Duration::from_secs(3))
            .build();

        assert_eq!(client.base_url(), "http://traffic.local:9000");
    }

    #[test]
    fn test_endpoint_trailing_slash_stripped() {
        let client = HealthClient::builder()
            .endpoint("http://localhost:8000/")
            .build();

        assert_eq!(client.health_url(), "http://localhost:8000/health");
    }

    #[test]
    fn test_resource_urls() {
        let client = HealthClient::builder()
            .endpoint("http://localhost:8000")
            .build();

        assert_eq!(client.health_url(), "http://localhost:8000/health");
        assert_eq!(client.docs_url(), "http://localhost:8000/docs");
        assert_eq!(
            client.system_info_url(),
            "http://localhost:8000/system/info"
        );
        assert_eq!(client.metrics_url(), "http://localhost:8000/metrics");
    }
}
