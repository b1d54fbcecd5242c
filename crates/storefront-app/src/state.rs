//! Application state (Model in TEA pattern)

use storefront_core::{Product, ProductSummary};

use crate::lifecycle::Lifecycle;

/// Fixed user-facing error text for a failed list fetch.
/// Shown identically regardless of the underlying cause.
pub const LIST_FETCH_ERROR: &str = "Failed to fetch products. Please try again.";

/// Fixed user-facing error text for a failed detail fetch
pub const DETAIL_FETCH_ERROR: &str = "Failed to fetch product details. Please try again.";

/// Shown on the detail screen when no error was recorded but no product
/// is present either
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Scrollable product list with summary cards
    #[default]
    List,
    /// Full detail view for one product
    Detail,
}

/// State for the product list screen.
///
/// `selected` is presentation state (keyboard cursor), not fetched data;
/// it survives re-render but is reset by a remount.
#[derive(Debug, Clone, Default)]
pub struct ListScreenState {
    pub lifecycle: Lifecycle<Vec<ProductSummary>>,
    pub selected: usize,
}

impl ListScreenState {
    /// Items of the settled list, empty before settle or after failure
    pub fn items(&self) -> &[ProductSummary] {
        self.lifecycle.data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// The id of the product under the cursor, if any
    pub fn selected_id(&self) -> Option<u64> {
        self.items().get(self.selected).map(|p| p.id)
    }

    pub fn select_next(&mut self) {
        let len = self.items().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items().len().saturating_sub(1);
    }

    /// Clamp the cursor after new data arrives
    pub fn clamp_selection(&mut self) {
        let len = self.items().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// Horizontally paged gallery viewport.
///
/// The current page is derived state: `floor(offset_x / viewport_width)`,
/// recomputed on every settle of the horizontal offset. No smoothing, no
/// velocity prediction; the container bounds are the only clamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    /// Horizontal scroll offset in cells
    pub offset_x: u16,
    /// Width of one page; set from the terminal before each draw
    pub viewport_width: u16,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            offset_x: 0,
            viewport_width: 1,
        }
    }
}

impl GalleryState {
    /// Index of the page currently in view
    pub fn current_image(&self) -> usize {
        (self.offset_x / self.viewport_width.max(1)) as usize
    }

    /// Record the viewport width the next draw will use, keeping the
    /// offset aligned to the page it was on
    pub fn set_viewport_width(&mut self, width: u16) {
        if width == 0 || width == self.viewport_width {
            return;
        }
        let page = self.current_image();
        self.viewport_width = width;
        self.offset_x = (page as u16).saturating_mul(width);
    }

    /// Scroll one viewport width forward, stopping at the last page
    pub fn page_forward(&mut self, page_count: usize) {
        let next = self.current_image() + 1;
        if next < page_count {
            self.offset_x = (next as u16).saturating_mul(self.viewport_width);
        }
    }

    /// Scroll one viewport width back
    pub fn page_back(&mut self) {
        self.offset_x = self.offset_x.saturating_sub(self.viewport_width);
    }

    /// Back to the first page
    pub fn reset(&mut self) {
        self.offset_x = 0;
    }
}

/// State for the product detail screen
#[derive(Debug, Clone, Default)]
pub struct DetailScreenState {
    /// Externally supplied id from the navigation hand-off
    pub product_id: Option<u64>,
    pub lifecycle: Lifecycle<Product>,
    pub gallery: GalleryState,
    /// Request generation; settlements carrying a stale generation are
    /// discarded so the rendered state always reflects the latest request
    pub request_seq: u64,
}

impl DetailScreenState {
    /// Begin loading `id`, returning the generation tag for this request.
    ///
    /// Also resets the gallery to page 0: a new load must never keep an
    /// image index from a previous product.
    pub fn begin_load(&mut self, id: u64) -> u64 {
        self.product_id = Some(id);
        self.lifecycle.begin();
        self.gallery.reset();
        self.request_seq += 1;
        self.request_seq
    }

    /// True when `seq` identifies the most recently issued request
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.request_seq && self.product_id.is_some()
    }

    pub fn product(&self) -> Option<&Product> {
        self.lifecycle.data()
    }

    /// Drop everything when the screen is dismissed
    pub fn close(&mut self) {
        self.product_id = None;
        self.lifecycle = Lifecycle::Idle;
        self.gallery.reset();
    }
}

/// Top-level application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub phase: AppPhase,
    pub screen: Screen,
    pub list: ListScreenState,
    pub detail: DetailScreenState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
