//! Key event handlers for each focused form control

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FocusField};
use stackexplain_core::ModelChoice;

/// Convert key events to messages based on the focused control
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(&key) {
        return Some(msg);
    }

    match state.focus {
        FocusField::ErrorInput => handle_key_error_input(key),
        FocusField::ModelSelector => handle_key_model_selector(key),
        FocusField::Links => handle_key_links(key),
    }
}

/// Bindings that work regardless of focus
fn handle_key_global(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') | InputKey::Esc => Some(Message::Quit),

        InputKey::CharCtrl('s') | InputKey::F(5) => Some(Message::Submit),
        InputKey::CharCtrl('t') | InputKey::F(2) => Some(Message::ToggleDarkMode),

        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),

        InputKey::PageUp => Some(Message::ScrollResultsUp),
        InputKey::PageDown => Some(Message::ScrollResultsDown),

        InputKey::CharCtrl('u') => Some(Message::ClearInput),

        _ => None,
    }
}

/// Handle key events while the error text area has focus
fn handle_key_error_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InsertChar(c)),
        // Error text is multi-line; Enter never submits here
        InputKey::Enter => Some(Message::InsertChar('\n')),

        InputKey::Backspace => Some(Message::DeleteBackward),
        InputKey::Delete => Some(Message::DeleteForward),

        InputKey::Left => Some(Message::CursorLeft),
        InputKey::Right => Some(Message::CursorRight),
        InputKey::Home => Some(Message::CursorLineStart),
        InputKey::End => Some(Message::CursorLineEnd),

        _ => None,
    }
}

/// Handle key events while the model selector has focus
fn handle_key_model_selector(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Up | InputKey::Char('h' | 'k') => Some(Message::PreviousModel),
        InputKey::Right | InputKey::Down | InputKey::Char('l' | 'j' | ' ') => {
            Some(Message::NextModel)
        }

        // Direct pick by position: '1' = first model
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            ModelChoice::ALL
                .get(index)
                .map(|model| Message::SelectModel(*model))
        }

        InputKey::Enter => Some(Message::Submit),

        _ => None,
    }
}

/// Handle key events while the relevant-links list has focus
fn handle_key_links(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPreviousLink),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextLink),
        InputKey::Enter | InputKey::Char('o') => Some(Message::OpenSelectedLink),
        _ => None,
    }
}
