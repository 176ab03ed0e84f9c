//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use stackexplain_app::{AppState, FocusField};

use crate::layout;
use crate::theme::Palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = Palette::for_mode(state.dark_mode);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(palette, state.dark_mode),
        areas.header,
    );

    let input = widgets::ErrorInputView::new(
        &state.input,
        palette,
        state.focus == FocusField::ErrorInput,
    );
    let cursor = input.cursor_position(areas.input);
    frame.render_widget(input, areas.input);
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }

    frame.render_widget(
        widgets::ModelSelector::new(
            state.selected_model,
            palette,
            state.focus == FocusField::ModelSelector,
        ),
        areas.model,
    );

    frame.render_widget(
        widgets::ExplanationPanel::new(state.last_response.as_ref(), palette)
            .selected_link(state.selected_link, state.focus == FocusField::Links)
            .scroll(state.result_scroll),
        areas.results,
    );

    frame.render_widget(widgets::StatusBar::new(state, palette), areas.status);
}
