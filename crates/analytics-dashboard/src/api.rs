//! API client for the Analytics Pro backend
//!
//! One method per endpoint. Every call is a single request: no retries, no
//! timeout. Non-2xx responses become an [`ApiError`] carrying the server's
//! `error` message when it sends one.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::error::ApiError;
use crate::types::{
    CategoryStat, ClientClusters, ClientListItem, ClientPrediction, ClientPredictionRequest,
    DashboardStats, ErrorBody, ProductClusters, ProductListItem, RevenuePrediction,
    RevenuePredictionRequest, TopClient, TopProduct,
};

/// Endpoint paths, relative to the base URL.
pub mod endpoints {
    pub const DASHBOARD_STATS: &str = "/api/dashboard/stats";
    pub const TOP_PRODUCTS: &str = "/api/dashboard/top-products";
    pub const CATEGORY_STATS: &str = "/api/dashboard/categories";
    pub const TOP_CLIENTS: &str = "/api/dashboard/top-clients";
    pub const PRODUCTS: &str = "/api/products/list";
    pub const CATEGORIES: &str = "/api/categories/list";
    pub const CLIENTS: &str = "/api/clients/list";
    pub const PRODUCT_CLUSTERS: &str = "/api/clusters";
    pub const CLIENT_CLUSTERS: &str = "/api/clusters/clients";
    pub const PREDICT: &str = "/api/predict";
    pub const PREDICT_CLIENT: &str = "/api/predict/client";
}

/// Error text for a failed response: the body's `error` field, else a generic message.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| format!("Server returned status {}", status))
}

/// API client for the analytics backend.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    base_url: String,
}

impl AnalyticsClient {
    /// Create a client for the base URL configured on the current document.
    pub fn new() -> Self {
        Self::from_config(&DashboardConfig::from_document())
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::with_base_url(&config.api_base_url)
    }

    /// Create a new client with a custom base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        log::error!("Request to {} failed ({}): {}", response.url(), status, message);
        Err(ApiError::status(status, message))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        log::debug!("GET {}", url);
        let response = Request::get(&url).send().await?;
        let response = Self::check(response).await?;
        response.json().await.map_err(Into::into)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        log::debug!("POST {}", url);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(body)?
            .send()
            .await?;
        let response = Self::check(response).await?;
        response.json().await.map_err(Into::into)
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json(endpoints::DASHBOARD_STATS).await
    }

    /// Top products by revenue.
    pub async fn get_top_products(&self) -> Result<Vec<TopProduct>, ApiError> {
        self.get_json(endpoints::TOP_PRODUCTS).await
    }

    pub async fn get_category_stats(&self) -> Result<Vec<CategoryStat>, ApiError> {
        self.get_json(endpoints::CATEGORY_STATS).await
    }

    /// Top clients by purchase count.
    pub async fn get_top_clients(&self) -> Result<Vec<TopClient>, ApiError> {
        self.get_json(endpoints::TOP_CLIENTS).await
    }

    // =========================================================================
    // Lists
    // =========================================================================

    pub async fn list_products(&self) -> Result<Vec<ProductListItem>, ApiError> {
        self.get_json(endpoints::PRODUCTS).await
    }

    pub async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(endpoints::CATEGORIES).await
    }

    pub async fn list_clients(&self) -> Result<Vec<ClientListItem>, ApiError> {
        self.get_json(endpoints::CLIENTS).await
    }

    // =========================================================================
    // Clusters
    // =========================================================================

    pub async fn get_product_clusters(&self) -> Result<ProductClusters, ApiError> {
        self.get_json(endpoints::PRODUCT_CLUSTERS).await
    }

    pub async fn get_client_clusters(&self) -> Result<ClientClusters, ApiError> {
        self.get_json(endpoints::CLIENT_CLUSTERS).await
    }

    // =========================================================================
    // Predictions
    // =========================================================================

    pub async fn predict_revenue(&self, request: &RevenuePredictionRequest) -> Result<RevenuePrediction, ApiError> {
        self.post_json(endpoints::PREDICT, request).await
    }

    pub async fn predict_client(&self, request: &ClientPredictionRequest) -> Result<ClientPrediction, ApiError> {
        self.post_json(endpoints::PREDICT_CLIENT, request).await
    }
}

impl Default for AnalyticsClient {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Dashboard Source
// =============================================================================

/// The four dashboard reads, abstracted so the loader and the report
/// pipeline can run against stubs.
#[allow(async_fn_in_trait)]
pub trait DashboardSource {
    async fn stats(&self) -> Result<DashboardStats, ApiError>;
    async fn top_products(&self) -> Result<Vec<TopProduct>, ApiError>;
    async fn categories(&self) -> Result<Vec<CategoryStat>, ApiError>;
    async fn top_clients(&self) -> Result<Vec<TopClient>, ApiError>;
}

impl DashboardSource for AnalyticsClient {
    async fn stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_dashboard_stats().await
    }

    async fn top_products(&self) -> Result<Vec<TopProduct>, ApiError> {
        self.get_top_products().await
    }

    async fn categories(&self) -> Result<Vec<CategoryStat>, ApiError> {
        self.get_category_stats().await
    }

    async fn top_clients(&self) -> Result<Vec<TopClient>, ApiError> {
        self.get_top_clients().await
    }
}

// =============================================================================
// Convenience Functions
// =============================================================================

/// Client for the current document's configuration.
pub fn client() -> AnalyticsClient {
    AnalyticsClient::new()
}

/// List products (convenience wrapper).
pub async fn list_products() -> Result<Vec<ProductListItem>, ApiError> {
    client().list_products().await
}

/// List categories (convenience wrapper).
pub async fn list_categories() -> Result<Vec<String>, ApiError> {
    client().list_categories().await
}

/// List clients (convenience wrapper).
pub async fn list_clients() -> Result<Vec<ClientListItem>, ApiError> {
    client().list_clients().await
}

/// Product clusters (convenience wrapper).
pub async fn get_product_clusters() -> Result<ProductClusters, ApiError> {
    client().get_product_clusters().await
}

/// Client clusters (convenience wrapper).
pub async fn get_client_clusters() -> Result<ClientClusters, ApiError> {
    client().get_client_clusters().await
}

/// Revenue prediction (convenience wrapper).
pub async fn predict_revenue(request: &RevenuePredictionRequest) -> Result<RevenuePrediction, ApiError> {
    client().predict_revenue(request).await
}

/// Client prediction (convenience wrapper).
pub async fn predict_client(request: &ClientPredictionRequest) -> Result<ClientPrediction, ApiError> {
    client().predict_client(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_uses_server_error() {
        assert_eq!(
            error_message(404, r#"{"error": "Clusters not trained"}"#),
            "Clusters not trained"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(error_message(500, "<html>oops</html>"), "Server returned status 500");
        assert_eq!(error_message(502, r#"{"detail": "x"}"#), "Server returned status 502");
        assert_eq!(error_message(400, r#"{"error": ""}"#), "Server returned status 400");
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = AnalyticsClient::with_base_url("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.endpoint(endpoints::CLIENT_CLUSTERS),
            "http://localhost:5000/api/clusters/clients"
        );
    }
}
