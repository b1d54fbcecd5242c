//! storefront-tui - Terminal UI for storefront
//!
//! This crate provides the ratatui-based terminal interface: event
//! polling, rendering, widgets, and the async runner that wires the pure
//! reducers in storefront-app to the catalog client in storefront-api.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
