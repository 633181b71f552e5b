//! HTTP client for the external catalog service.

use storefront_catalog::{CatalogError, Product};

use crate::config::ShellConfig;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("catalog service returned status {0}")]
    Status(u16),
    #[error("could not decode catalog: {0}")]
    Decode(String),
}

impl From<FetchError> for CatalogError {
    fn from(err: FetchError) -> Self {
        CatalogError::fetch_failed(err.to_string())
    }
}

/// One-shot product list fetch.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(config: &ShellConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http,
            url: config.catalog_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the catalog URL and decode a JSON array of products.
    ///
    /// No retries: a failure is reported once and the caller decides.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        tracing::debug!(url = %self.url, "fetching catalog");

        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        serde_json::from_slice::<Vec<Product>>(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Fetch and convert to the outcome the catalog store expects.
    pub async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        self.fetch_products().await.map_err(CatalogError::from)
    }
}
