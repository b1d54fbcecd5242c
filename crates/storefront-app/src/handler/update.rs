//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, warn};

use crate::message::Message;
use crate::state::{AppState, AppPhase, Screen, DETAIL_FETCH_ERROR, LIST_FETCH_ERROR};

use super::{keys::handle_key, Task, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // List Screen Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::MountList => {
            state.screen = Screen::List;
            state.list.lifecycle.begin();
            state.list.selected = 0;
            UpdateResult::action(UpdateAction::SpawnTask(Task::FetchList))
        }

        Message::ListLoaded { products } => {
            debug!("List settled with {} products", products.len());
            state.list.lifecycle.succeed(products);
            state.list.clamp_selection();
            UpdateResult::none()
        }

        Message::ListFailed { error } => {
            warn!("List fetch failed: {error}");
            state.list.lifecycle.fail(LIST_FETCH_ERROR);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // List Screen Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.list.select_next();
            UpdateResult::none()
        }
        Message::SelectPrev => {
            state.list.select_prev();
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.list.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.list.select_last();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Detail Screen Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::OpenProduct { id } => {
            state.screen = Screen::Detail;
            let seq = state.detail.begin_load(id);
            UpdateResult::action(UpdateAction::SpawnTask(Task::FetchProduct { id, seq }))
        }

        Message::ProductLoaded { seq, product } => {
            if !state.detail.is_current(seq) {
                debug!(
                    "Discarding stale detail response (seq {seq}, current {})",
                    state.detail.request_seq
                );
                return UpdateResult::none();
            }
            state.detail.lifecycle.succeed(*product);
            UpdateResult::none()
        }

        Message::ProductFailed { seq, error } => {
            if !state.detail.is_current(seq) {
                debug!(
                    "Discarding stale detail failure (seq {seq}, current {})",
                    state.detail.request_seq
                );
                return UpdateResult::none();
            }
            warn!("Detail fetch failed: {error}");
            state.detail.lifecycle.fail(DETAIL_FETCH_ERROR);
            UpdateResult::none()
        }

        Message::CloseDetail => {
            state.detail.close();
            state.screen = Screen::List;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Gallery
        // ─────────────────────────────────────────────────────────
        Message::GalleryNext => {
            let page_count = state
                .detail
                .product()
                .map(|p| p.images.len())
                .unwrap_or(0);
            state.detail.gallery.page_forward(page_count);
            UpdateResult::none()
        }

        Message::GalleryPrev => {
            state.detail.gallery.page_back();
            UpdateResult::none()
        }
    }
}
