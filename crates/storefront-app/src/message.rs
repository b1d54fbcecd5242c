//! Message types for the application (TEA pattern)

use storefront_core::{Product, ProductSummary};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // List Screen Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Mount the list screen and start the list fetch
    MountList,
    /// List fetch settled successfully
    ListLoaded { products: Vec<ProductSummary> },
    /// List fetch settled with an error; `error` is the underlying cause
    /// (logged only), the user sees the fixed error text
    ListFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // List Screen Navigation
    // ─────────────────────────────────────────────────────────
    /// Move the cursor down one card
    SelectNext,
    /// Move the cursor up one card
    SelectPrev,
    /// Jump to the first card
    SelectFirst,
    /// Jump to the last card
    SelectLast,

    // ─────────────────────────────────────────────────────────
    // Detail Screen Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Navigation hand-off: open the detail screen for a product id
    OpenProduct { id: u64 },
    /// Detail fetch settled successfully; `seq` is the request generation
    ProductLoaded { seq: u64, product: Box<Product> },
    /// Detail fetch settled with an error
    ProductFailed { seq: u64, error: String },
    /// Reverse hand-off: dismiss the detail screen
    CloseDetail,

    // ─────────────────────────────────────────────────────────
    // Gallery
    // ─────────────────────────────────────────────────────────
    /// Page the gallery one viewport width forward
    GalleryNext,
    /// Page the gallery one viewport width back
    GalleryPrev,
}
