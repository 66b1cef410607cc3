// web_app/api/catalog.rs - HTTP client for the external catalog service
//
// The dashboard owns no data of its own; products and categories come
// from a public REST API. This module wraps the two read endpoints and
// holds the global client handle used by server functions.

use std::env;
use std::sync::OnceLock;

use reqwest::StatusCode;

use crate::web_app::model::ProductRecord;

const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

static CLIENT: OnceLock<CatalogClient> = OnceLock::new();

/// Errors from the catalog service.
///
/// This is the only error taxonomy in the system; empty filter results
/// and out-of-range pages are normal states, not errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog service returned {0}")]
    Status(StatusCode),
}

/// Read client for the remote catalog endpoints.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build a client from `CATALOG_API_URL`, falling back to the public
    /// fakestoreapi instance.
    pub fn from_env() -> Self {
        let base_url =
            env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full product list.
    pub async fn fetch_products(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        self.get_json(&format!("{}/products", self.base_url)).await
    }

    /// Fetch the category labels.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json(&format!("{}/products/categories", self.base_url))
            .await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

/// Install the global catalog client used by server functions.
pub fn init_client(client: CatalogClient) {
    tracing::info!("Initializing global catalog client");
    if CLIENT.set(client).is_err() {
        tracing::warn!("Catalog client already initialized");
    }
}

/// Get the global catalog client.
pub fn client() -> Option<CatalogClient> {
    CLIENT.get().cloned()
}
