//! # storefront-core - Core Domain Types
//!
//! Foundation crate for storefront. Provides catalog domain types, error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Catalog Types (`catalog`)
//! - [`Product`] - One product as served by the catalog API, validated at the boundary
//! - [`ProductSummary`] - Compact list-item projection for the summary card
//! - [`ProductPage`] - One page of products plus total/skip/limit metadata
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use storefront_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;

/// Prelude for common imports used throughout all storefront crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{Product, ProductPage, ProductSummary, MAX_RATING};
pub use error::{Error, Result, ResultExt};
