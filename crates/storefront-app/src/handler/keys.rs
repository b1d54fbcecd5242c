//! Key event handlers for UI screens
//!
//! Maps an [`InputKey`] to a follow-up [`Message`] depending on the
//! current screen. Pure function of state + key; unrecognized keys are
//! ignored.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen};

/// Handle a key event, producing a follow-up message if the key is bound
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global bindings first
    match key {
        InputKey::CharCtrl('c') | InputKey::Char('q') => return Some(Message::Quit),
        _ => {}
    }

    match state.screen {
        Screen::List => handle_list_key(state, key),
        Screen::Detail => handle_detail_key(key),
    }
}

fn handle_list_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),
        InputKey::Enter => {
            // The hand-off carries whatever id is under the cursor; the
            // lifecycle does not validate it
            state.list.selected_id().map(|id| Message::OpenProduct { id })
        }
        _ => None,
    }
}

fn handle_detail_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Right | InputKey::Char('l') => Some(Message::GalleryNext),
        InputKey::Left | InputKey::Char('h') => Some(Message::GalleryPrev),
        InputKey::Esc | InputKey::Backspace => Some(Message::CloseDetail),
        _ => None,
    }
}
