//! Message types for the application (TEA pattern)

use std::fmt;

use crate::input_key::InputKey;
use stackexplain_core::{ExplanationRecord, ModelChoice};

/// Token identifying one submitted request.
///
/// Issued in strictly increasing order; only the settlement carrying the
/// most recently issued id is applied to state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from terminal
    Paste(String),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Error Input Editing
    // ─────────────────────────────────────────────────────────
    /// Insert a character at the caret
    InsertChar(char),
    /// Insert a block of text at the caret
    InsertText(String),
    /// Delete the character before the caret
    DeleteBackward,
    /// Delete the character under the caret
    DeleteForward,
    CursorLeft,
    CursorRight,
    /// Move caret to start of current line
    CursorLineStart,
    /// Move caret to end of current line
    CursorLineEnd,
    /// Clear the whole input
    ClearInput,

    // ─────────────────────────────────────────────────────────
    // Focus & Model Selection
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    NextModel,
    PreviousModel,
    SelectModel(ModelChoice),

    // ─────────────────────────────────────────────────────────
    // Presentation
    // ─────────────────────────────────────────────────────────
    ToggleDarkMode,
    /// Scroll results panel up one page
    ScrollResultsUp,
    /// Scroll results panel down one page
    ScrollResultsDown,

    // ─────────────────────────────────────────────────────────
    // Relevant Links
    // ─────────────────────────────────────────────────────────
    SelectNextLink,
    SelectPreviousLink,
    /// Open the highlighted link in the browser
    OpenSelectedLink,

    // ─────────────────────────────────────────────────────────
    // Backend Exchange
    // ─────────────────────────────────────────────────────────
    /// Send the current error text and model to the backend
    Submit,
    /// Backend answered with a decodable record
    ExplanationReceived {
        request_id: RequestId,
        record: ExplanationRecord,
    },
    /// Backend exchange failed (transport, status, or decoding)
    ExplanationFailed { request_id: RequestId, error: String },
}
