//! Catalog domain types
//!
//! Defines the explicit schema for everything that crosses the API
//! boundary. The upstream catalog is dynamically typed JSON; every
//! payload is deserialized into these types and then validated, so a
//! shape mismatch surfaces as a typed parse error at the client instead
//! of leaking into the render layer.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Highest rating the catalog can report
pub const MAX_RATING: f64 = 5.0;

/// A single product as returned by the catalog API.
///
/// Immutable once fetched; a re-fetch replaces the whole value, fields
/// are never patched individually.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub category: String,
    /// Single list-thumbnail image URL
    pub thumbnail: String,
    /// Ordered gallery images; may be absent upstream
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Validate the wire shape beyond what serde enforces.
    ///
    /// Rejects ratings outside [0, MAX_RATING], negative prices, and
    /// empty titles. Called by the API client on every deserialized
    /// product before it is handed to the application layer.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::parse(format!("product {} has an empty title", self.id)));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(Error::parse(format!(
                "product {} rating {} outside 0..={}",
                self.id, self.rating, MAX_RATING
            )));
        }
        if self.price < 0.0 {
            return Err(Error::parse(format!(
                "product {} has negative price {}",
                self.id, self.price
            )));
        }
        Ok(())
    }

    /// Project this product into its list-screen summary form
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            thumbnail: self.thumbnail.clone(),
            price: self.price,
            rating: self.rating,
        }
    }
}

/// Compact list-item projection of a [`Product`] for the summary card
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub price: f64,
    pub rating: f64,
}

/// One page of products from `GET /products`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl ProductPage {
    /// Validate every product on the page
    pub fn validate(&self) -> Result<()> {
        for product in &self.products {
            product.validate()?;
        }
        Ok(())
    }
}
