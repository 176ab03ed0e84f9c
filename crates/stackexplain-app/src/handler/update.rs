//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, FocusField};
use crate::AppState;
use stackexplain_core::prelude::*;
use stackexplain_core::ExplanationRecord;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Rows scrolled by one PageUp/PageDown in the results panel
const RESULTS_PAGE_ROWS: u16 = 5;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Paste(text) => {
            // Pasting always targets the error input, wherever focus is
            state.focus = FocusField::ErrorInput;
            state.input.insert_str(&text);
            UpdateResult::none()
        }

        Message::Tick => {
            if state.is_pending() {
                state.tick_count = state.tick_count.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Error Input Editing
        // ─────────────────────────────────────────────────────────
        Message::InsertChar(c) => {
            state.input.insert_char(c);
            UpdateResult::none()
        }
        Message::InsertText(text) => {
            state.input.insert_str(&text);
            UpdateResult::none()
        }
        Message::DeleteBackward => {
            state.input.delete_backward();
            UpdateResult::none()
        }
        Message::DeleteForward => {
            state.input.delete_forward();
            UpdateResult::none()
        }
        Message::CursorLeft => {
            state.input.move_left();
            UpdateResult::none()
        }
        Message::CursorRight => {
            state.input.move_right();
            UpdateResult::none()
        }
        Message::CursorLineStart => {
            state.input.move_line_start();
            UpdateResult::none()
        }
        Message::CursorLineEnd => {
            state.input.move_line_end();
            UpdateResult::none()
        }
        Message::ClearInput => {
            state.input.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus & Model Selection
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.focus_previous();
            UpdateResult::none()
        }
        Message::NextModel => {
            state.selected_model = state.selected_model.next();
            debug!("Model selected: {}", state.selected_model.id());
            UpdateResult::none()
        }
        Message::PreviousModel => {
            state.selected_model = state.selected_model.previous();
            debug!("Model selected: {}", state.selected_model.id());
            UpdateResult::none()
        }
        Message::SelectModel(model) => {
            state.selected_model = model;
            debug!("Model selected: {}", model.id());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Presentation
        // ─────────────────────────────────────────────────────────
        Message::ToggleDarkMode => {
            state.toggle_dark_mode();
            UpdateResult::none()
        }
        Message::ScrollResultsUp => {
            state.result_scroll = state.result_scroll.saturating_sub(RESULTS_PAGE_ROWS);
            UpdateResult::none()
        }
        Message::ScrollResultsDown => {
            // Clamped against the rendered height by the results widget
            state.result_scroll = state.result_scroll.saturating_add(RESULTS_PAGE_ROWS);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Relevant Links
        // ─────────────────────────────────────────────────────────
        Message::SelectNextLink => {
            state.select_next_link();
            UpdateResult::none()
        }
        Message::SelectPreviousLink => {
            state.select_previous_link();
            UpdateResult::none()
        }
        Message::OpenSelectedLink => match state.selected_link_url() {
            Some(url) => UpdateResult::action(UpdateAction::OpenUrl {
                url: url.to_string(),
                browser: state.settings.ui.browser.clone(),
            }),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Backend Exchange
        // ─────────────────────────────────────────────────────────
        Message::Submit => {
            let request = state.build_request();
            let request_id = state.issue_request();
            info!(
                "Submitting request {} ({} chars, model: {})",
                request_id,
                request.error.chars().count(),
                request.model.as_deref().unwrap_or("<not sent>")
            );
            UpdateResult::action(UpdateAction::SendExplainRequest {
                request_id,
                request,
            })
        }

        Message::ExplanationReceived { request_id, record } => {
            if !state.apply_settlement(request_id, record) {
                debug!("Discarding superseded response for request {}", request_id);
            }
            UpdateResult::none()
        }

        Message::ExplanationFailed { request_id, error } => {
            if state.awaits(request_id) {
                state.apply_settlement(request_id, ExplanationRecord::fallback());
            } else {
                debug!(
                    "Discarding superseded failure for request {}: {}",
                    request_id, error
                );
            }
            UpdateResult::none()
        }
    }
}
