//! Screen layout definitions for the TUI
//!
//! Stacks the form top to bottom: header, error input, model selector,
//! results panel, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Smallest error input box (border + 3 text rows)
const MIN_INPUT_HEIGHT: u16 = 5;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with theme indicator
    pub header: Rect,

    /// Multi-line error text area
    pub input: Rect,

    /// Model selector row
    pub model: Rect,

    /// Explanation record (or placeholder hint)
    pub results: Rect,

    /// Single-row status line with key hints
    pub status: Rect,
}

/// Create the main screen layout.
///
/// The error input gets a third of the height (at least
/// `MIN_INPUT_HEIGHT` rows); results take whatever remains.
pub fn create(area: Rect) -> ScreenAreas {
    let input_height = (area.height / 3).max(MIN_INPUT_HEIGHT);

    let chunks = Layout::vertical([
        Constraint::Length(3),            // Header (glass container)
        Constraint::Length(input_height), // Error input
        Constraint::Length(3),            // Model selector
        Constraint::Min(3),               // Results
        Constraint::Length(1),            // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        input: chunks[1],
        model: chunks[2],
        results: chunks[3],
        status: chunks[4],
    }
}
