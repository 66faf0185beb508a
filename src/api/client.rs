//! The catalog REST client
//!
//! Four stateless operations against a configured base URL:
//!
//! | Operation | Method | Path             |
//! |-----------|--------|------------------|
//! | list      | GET    | `products`       |
//! | create    | POST   | `products`       |
//! | update    | PUT    | `products/{id}`  |
//! | delete    | DELETE | `products/{id}`  |
//!
//! No retries, no timeouts, no cancellation. Every failure collapses into
//! the single [`ApiError`]; the workflow layer does not distinguish a
//! network failure from a server-side one.

use reqwest::Client;
use thiserror::Error;

use crate::state::data::Product;

/// Base URL used when `CATALOG_API_BASE` is not set.
pub const DEFAULT_BASE: &str = "https://fakestoreapi.com/";

/// Environment variable overriding the backend base URL.
pub const BASE_ENV_VAR: &str = "CATALOG_API_BASE";

/// The one failure kind surfaced by the client.
///
/// Deliberately carries no structured detail: the UI renders every error
/// as the same generic toast. The underlying cause is logged at `warn`
/// before it is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("request failed")]
pub struct ApiError;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        tracing::warn!("request failed: {err}");
        ApiError
    }
}

/// Thin HTTP client for the product catalog.
///
/// Cheap to clone (the inner `reqwest::Client` is an `Arc`), so each
/// background task takes its own copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    /// Create a client for the given base URL.
    ///
    /// The base is normalized to end with `/` so that paths can be
    /// appended by plain concatenation.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }

        ApiClient {
            http: Client::new(),
            base,
        }
    }

    /// Create a client from `CATALOG_API_BASE`, falling back to the
    /// built-in default backend.
    pub fn from_env() -> Self {
        let base = std::env::var(BASE_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE.to_string());
        Self::new(base)
    }

    /// The configured base URL (always ends with `/`).
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Fetch the full product collection.
    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let products = self
            .http
            .get(self.url("products"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(products)
    }

    /// Persist a new product; the server assigns the id.
    pub async fn create(&self, product: &Product) -> Result<Product, ApiError> {
        let created = self
            .http
            .post(self.url("products"))
            .json(product)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(created)
    }

    /// Replace an existing product. Fails generically when the product
    /// carries no id.
    pub async fn update(&self, product: &Product) -> Result<Product, ApiError> {
        let id = product.id.as_deref().ok_or(ApiError)?;
        let updated = self
            .http
            .put(self.url(&format!("products/{id}")))
            .json(product)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(updated)
    }

    /// Delete a product by id. The response body is ignored.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.http
            .delete(self.url(&format!("products/{id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
