//! Catalog HTTP client
//!
//! Thin wrapper over two read-only endpoints of the upstream catalog:
//! `GET {base}/products` and `GET {base}/products/{id}`. Each call is a
//! fresh request: no retries, no caching, no per-call timeout knobs.
//! Failures are logged and propagated to the caller, never swallowed. A
//! non-existent id surfaces through the upstream 404 as the same error
//! kind as any other non-success status; callers treat all failures
//! identically.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use storefront_core::catalog::{Product, ProductPage};
use storefront_core::prelude::*;

/// Default upstream catalog endpoint
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Request timeout baked into the client at construction
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the remote product catalog
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client against `base_url`.
    ///
    /// Fails if the URL cannot be parsed or the TLS backend cannot be
    /// initialized.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|_| Error::invalid_base_url(base_url.to_string()))?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Create a client against the default upstream catalog
    pub fn with_default_base() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// The base URL this client was constructed with
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch one page of products: `GET {base}/products`
    pub async fn list_products(&self) -> Result<ProductPage> {
        let url = self.endpoint(&["products"])?;
        debug!("Fetching product list from {url}");

        let body = self
            .get(url)
            .await
            .context("Error fetching product list")?;

        let page: ProductPage =
            serde_json::from_str(&body).map_err(|e| Error::parse(e.to_string()))?;
        page.validate()?;

        info!(
            "Fetched {} products (total={}, skip={}, limit={})",
            page.products.len(),
            page.total,
            page.skip,
            page.limit
        );
        Ok(page)
    }

    /// Fetch a single product by id: `GET {base}/products/{id}`
    pub async fn get_product(&self, id: u64) -> Result<Product> {
        let url = self.endpoint(&["products", &id.to_string()])?;
        debug!("Fetching product {id} from {url}");

        let body = self
            .get(url)
            .await
            .with_context(|| format!("Error fetching product with id {id}"))?;

        let product: Product =
            serde_json::from_str(&body).map_err(|e| Error::parse(e.to_string()))?;
        product.validate()?;

        Ok(product)
    }

    /// Issue a GET and return the body, mapping transport failures and
    /// non-success statuses to our error types.
    async fn get(&self, url: Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::api(status.as_u16(), url.to_string()));
        }

        response
            .text()
            .await
            .map_err(|e| Error::http(e.to_string()))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::invalid_base_url(self.base_url.to_string()))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}
