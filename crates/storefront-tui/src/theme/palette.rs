//! Color palette for the storefront theme

use ratatui::style::Color;

// --- Background layers ---
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Catalog-specific ---
pub const PRICE: Color = Color::Cyan;
pub const RATING: Color = Color::Yellow;
pub const DOT_ACTIVE: Color = Color::Cyan;
pub const DOT_INACTIVE: Color = Color::DarkGray;
