//! Full-screen rendering tests

use super::view;
use crate::test_utils::TestTerminal;
use crate::theme::Palette;
use crate::widgets::{NO_LINKS_MESSAGE, PENDING_TEXT};
use stackexplain_app::{update, AppState, Message};
use stackexplain_client::test_utils::type_error_record;
use stackexplain_core::ModelChoice;

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(100, 30);
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_initial_screen() {
    let term = draw(&AppState::new());

    assert!(term.buffer_contains("StackExplain"));
    assert!(term.buffer_contains("Error Message"));
    assert!(term.buffer_contains(ModelChoice::DeepSeek.label()));
    assert!(term.buffer_contains("Press Ctrl+S"));
    assert!(term.buffer_contains("Ready"));
}

#[test]
fn test_type_error_walkthrough_screen() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::InsertText("TypeError: x is not a function".to_string()),
    );
    let request_id = state.issue_request();
    update(
        &mut state,
        Message::ExplanationReceived {
            request_id,
            record: type_error_record(),
        },
    );

    let term = draw(&state);

    assert!(term.buffer_contains("TypeError: x is not a function"));
    assert!(term.buffer_contains("Error Type"));
    assert!(term.buffer_contains("x is undefined"));
    assert!(term.buffer_contains("Suggested Fix"));
    assert!(term.buffer_contains("check initialization"));
    assert!(term.buffer_contains(NO_LINKS_MESSAGE));
}

#[test]
fn test_pending_keeps_previous_record() {
    let mut state = AppState::new();
    let first = state.issue_request();
    state.apply_settlement(first, type_error_record());
    state.issue_request();

    let term = draw(&state);

    assert!(term.buffer_contains(PENDING_TEXT));
    assert!(term.buffer_contains("x is undefined"));
}

#[test]
fn test_failure_screen_shows_fallback() {
    let mut state = AppState::new();
    let request_id = state.issue_request();
    update(
        &mut state,
        Message::ExplanationFailed {
            request_id,
            error: "connection refused".to_string(),
        },
    );

    let term = draw(&state);

    assert!(term.buffer_contains("RequestError"));
    assert!(term.buffer_contains("An error occurred while contacting the server."));
    assert!(!term.buffer_contains("connection refused"));
}

#[test]
fn test_dark_mode_switches_background() {
    let mut state = AppState::new();

    let term = draw(&state);
    assert_eq!(term.cell_bg(0, 29), Palette::LIGHT.background);

    update(&mut state, Message::ToggleDarkMode);
    let term = draw(&state);
    assert_eq!(term.cell_bg(0, 29), Palette::DARK.background);
}

#[test]
fn test_cursor_shown_in_focused_input() {
    let mut state = AppState::new();
    update(&mut state, Message::InsertText("ab".to_string()));

    let mut term = TestTerminal::with_size(100, 30);
    term.draw_with(|frame| view(frame, &state));

    let position = term.terminal.get_cursor_position().unwrap();
    // Header is 3 rows; input border adds one row and one column
    assert_eq!((position.x, position.y), (3, 4));
}
