//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, AppPhase, Screen, DETAIL_FETCH_ERROR, LIST_FETCH_ERROR};
use storefront_core::{Product, ProductSummary};

/// Helper to create a test product with a given id and gallery size
fn test_product(id: u64, image_count: usize) -> Product {
    Product {
        id,
        title: format!("Product {id}"),
        description: "A test product".to_string(),
        price: 9.99,
        rating: 4.5,
        category: "beauty".to_string(),
        thumbnail: format!("https://cdn.example.com/{id}/thumb.jpg"),
        images: (0..image_count)
            .map(|i| format!("https://cdn.example.com/{id}/{i}.jpg"))
            .collect(),
    }
}

fn test_summary(id: u64, title: &str) -> ProductSummary {
    ProductSummary {
        id,
        title: title.to_string(),
        description: "desc".to_string(),
        thumbnail: format!("https://cdn.example.com/{id}.jpg"),
        price: 9.99,
        rating: 4.0,
    }
}

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_quit_message() {
    let state = AppState::new();

    let result = handle_key(&state, InputKey::Char('q'));

    assert!(matches!(result, Some(Message::Quit)));
}

#[test]
fn test_ctrl_c_produces_quit_on_any_screen() {
    let mut state = AppState::new();
    state.screen = Screen::Detail;

    let result = handle_key(&state, InputKey::CharCtrl('c'));

    assert!(matches!(result, Some(Message::Quit)));
}

// ─────────────────────────────────────────────────────────────
// List lifecycle
// ─────────────────────────────────────────────────────────────

#[test]
fn test_mount_list_enters_loading_and_spawns_fetch() {
    let mut state = AppState::new();

    let result = update(&mut state, Message::MountList);

    assert!(state.list.lifecycle.is_loading());
    assert_eq!(
        result.action,
        Some(UpdateAction::SpawnTask(Task::FetchList))
    );
}

#[test]
fn test_list_loaded_settles_with_items_in_order() {
    let mut state = AppState::new();
    update(&mut state, Message::MountList);

    update(
        &mut state,
        Message::ListLoaded {
            products: vec![test_summary(1, "A"), test_summary(2, "B")],
        },
    );

    assert!(!state.list.lifecycle.is_loading());
    assert_eq!(state.list.lifecycle.error(), None);
    let items = state.list.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "A");
    assert_eq!(items[1].title, "B");
}

#[test]
fn test_list_failed_settles_with_fixed_error_and_no_items() {
    let mut state = AppState::new();
    update(&mut state, Message::MountList);

    update(
        &mut state,
        Message::ListFailed {
            error: "connection refused".to_string(),
        },
    );

    assert!(!state.list.lifecycle.is_loading());
    assert_eq!(state.list.lifecycle.error(), Some(LIST_FETCH_ERROR));
    assert!(state.list.items().is_empty());
}

#[test]
fn test_enter_on_card_emits_navigation_handoff() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::ListLoaded {
            products: vec![test_summary(1, "A")],
        },
    );

    let msg = handle_key(&state, InputKey::Enter);
    assert!(matches!(msg, Some(Message::OpenProduct { id: 1 })));
}

#[test]
fn test_enter_without_items_is_ignored() {
    let state = AppState::new();
    assert!(handle_key(&state, InputKey::Enter).is_none());
}

#[test]
fn test_selection_moves_with_arrow_keys() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::ListLoaded {
            products: vec![test_summary(1, "A"), test_summary(2, "B"), test_summary(3, "C")],
        },
    );

    update(&mut state, Message::SelectNext);
    assert_eq!(state.list.selected_id(), Some(2));
    update(&mut state, Message::SelectLast);
    assert_eq!(state.list.selected_id(), Some(3));
    update(&mut state, Message::SelectPrev);
    assert_eq!(state.list.selected_id(), Some(2));
    update(&mut state, Message::SelectFirst);
    assert_eq!(state.list.selected_id(), Some(1));
}

// ─────────────────────────────────────────────────────────────
// Detail lifecycle
// ─────────────────────────────────────────────────────────────

#[test]
fn test_open_product_switches_screen_and_spawns_tagged_fetch() {
    let mut state = AppState::new();

    let result = update(&mut state, Message::OpenProduct { id: 7 });

    assert_eq!(state.screen, Screen::Detail);
    assert!(state.detail.lifecycle.is_loading());
    assert_eq!(
        result.action,
        Some(UpdateAction::SpawnTask(Task::FetchProduct { id: 7, seq: 1 }))
    );
}

#[test]
fn test_product_loaded_settles_with_image_index_zero() {
    let mut state = AppState::new();
    state.detail.gallery.set_viewport_width(40);
    update(&mut state, Message::OpenProduct { id: 1 });

    update(
        &mut state,
        Message::ProductLoaded {
            seq: 1,
            product: Box::new(test_product(1, 2)),
        },
    );

    let product = state.detail.product().unwrap();
    assert_eq!(product.images.len(), 2);
    assert_eq!(state.detail.gallery.current_image(), 0);
}

#[test]
fn test_product_failed_settles_with_fixed_error() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenProduct { id: 999 });

    update(
        &mut state,
        Message::ProductFailed {
            seq: 1,
            error: "404 Not Found".to_string(),
        },
    );

    assert!(!state.detail.lifecycle.is_loading());
    assert_eq!(state.detail.lifecycle.error(), Some(DETAIL_FETCH_ERROR));
    assert!(state.detail.product().is_none());
}

#[test]
fn test_stale_detail_response_is_discarded() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenProduct { id: 1 }); // seq 1
    update(&mut state, Message::OpenProduct { id: 2 }); // seq 2

    // Late resolution of the first request must not overwrite the second
    update(
        &mut state,
        Message::ProductLoaded {
            seq: 1,
            product: Box::new(test_product(1, 1)),
        },
    );
    assert!(state.detail.lifecycle.is_loading());

    update(
        &mut state,
        Message::ProductLoaded {
            seq: 2,
            product: Box::new(test_product(2, 1)),
        },
    );
    assert_eq!(state.detail.product().unwrap().id, 2);
}

#[test]
fn test_stale_detail_failure_is_discarded() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenProduct { id: 1 });
    update(&mut state, Message::OpenProduct { id: 2 });

    update(
        &mut state,
        Message::ProductFailed {
            seq: 1,
            error: "timeout".to_string(),
        },
    );
    assert!(state.detail.lifecycle.is_loading());
    assert_eq!(state.detail.lifecycle.error(), None);
}

#[test]
fn test_resolution_after_close_is_discarded() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenProduct { id: 1 });
    update(&mut state, Message::CloseDetail);

    update(
        &mut state,
        Message::ProductLoaded {
            seq: 1,
            product: Box::new(test_product(1, 1)),
        },
    );

    assert_eq!(state.screen, Screen::List);
    assert!(state.detail.product().is_none());
}

#[test]
fn test_reopening_resets_image_index() {
    let mut state = AppState::new();
    state.detail.gallery.set_viewport_width(40);
    update(&mut state, Message::OpenProduct { id: 1 });
    update(
        &mut state,
        Message::ProductLoaded {
            seq: 1,
            product: Box::new(test_product(1, 3)),
        },
    );

    update(&mut state, Message::GalleryNext);
    update(&mut state, Message::GalleryNext);
    assert_eq!(state.detail.gallery.current_image(), 2);

    // A new load begins; the derived index must restart at page 0
    update(&mut state, Message::OpenProduct { id: 2 });
    assert_eq!(state.detail.gallery.current_image(), 0);
}

#[test]
fn test_close_detail_returns_to_list_without_refetch() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::ListLoaded {
            products: vec![test_summary(1, "A")],
        },
    );
    update(&mut state, Message::OpenProduct { id: 1 });

    let result = update(&mut state, Message::CloseDetail);

    assert_eq!(state.screen, Screen::List);
    assert!(result.action.is_none());
    assert_eq!(state.list.items().len(), 1);
}

// ─────────────────────────────────────────────────────────────
// Gallery paging
// ─────────────────────────────────────────────────────────────

#[test]
fn test_gallery_pages_clamp_to_image_count() {
    let mut state = AppState::new();
    state.detail.gallery.set_viewport_width(40);
    update(&mut state, Message::OpenProduct { id: 1 });
    update(
        &mut state,
        Message::ProductLoaded {
            seq: 1,
            product: Box::new(test_product(1, 2)),
        },
    );

    update(&mut state, Message::GalleryNext);
    assert_eq!(state.detail.gallery.current_image(), 1);
    update(&mut state, Message::GalleryNext); // at last image
    assert_eq!(state.detail.gallery.current_image(), 1);

    update(&mut state, Message::GalleryPrev);
    assert_eq!(state.detail.gallery.current_image(), 0);
    update(&mut state, Message::GalleryPrev); // at first image
    assert_eq!(state.detail.gallery.current_image(), 0);
}

#[test]
fn test_gallery_keys_ignored_without_product() {
    let mut state = AppState::new();
    state.screen = Screen::Detail;
    state.detail.gallery.set_viewport_width(40);

    update(&mut state, Message::GalleryNext);
    assert_eq!(state.detail.gallery.current_image(), 0);
}

#[test]
fn test_detail_keys_map_to_gallery_and_close() {
    let mut state = AppState::new();
    state.screen = Screen::Detail;

    assert!(matches!(
        handle_key(&state, InputKey::Right),
        Some(Message::GalleryNext)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Left),
        Some(Message::GalleryPrev)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::CloseDetail)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Backspace),
        Some(Message::CloseDetail)
    ));
}
