//! storefront-app - Application state and update logic for storefront
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a typed [`AppState`], a [`Message`] enum, and a pure
//! [`update`] reducer. Both screen lifecycles (list and detail) are
//! explicit state machines, callable and testable without a rendering
//! surface. No I/O happens here; fetches are described as [`Task`]s for
//! the event loop to spawn.

pub mod handler;
pub mod input_key;
pub mod lifecycle;
pub mod message;
pub mod state;

// Re-export primary types
pub use handler::{update, Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use lifecycle::Lifecycle;
pub use message::Message;
pub use state::{
    AppState, DetailScreenState, GalleryState, ListScreenState, Screen, DETAIL_FETCH_ERROR,
    LIST_FETCH_ERROR, PRODUCT_NOT_FOUND,
};
