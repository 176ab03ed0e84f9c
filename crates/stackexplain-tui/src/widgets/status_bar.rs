//! Status bar widget
//!
//! Request state on the left, key hints for the focused control on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use stackexplain_app::{AppState, FocusField};

use crate::theme::{styles, Palette};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Progress text shown while a request is outstanding
pub const PENDING_TEXT: &str = "Reasoning...";

/// Status bar widget showing request state and key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn state_indicator(&self) -> Span<'static> {
        let p = self.palette;
        if self.state.is_pending() {
            let frame = SPINNER[(self.state.tick_count as usize) % SPINNER.len()];
            return Span::styled(format!("{} {}", frame, PENDING_TEXT), styles::status_yellow(p));
        }

        match &self.state.last_response {
            None => Span::styled("○ Ready", styles::text_muted(p)),
            Some(record) if record.is_fallback() => {
                Span::styled("✗ Request failed", styles::status_red(p))
            }
            Some(_) => Span::styled("● Explained", styles::status_green(p)),
        }
    }

    fn settled_at(&self) -> Option<Span<'static>> {
        self.state.last_settled_at.map(|at| {
            Span::styled(
                format!("at {}", at.format("%H:%M:%S")),
                styles::text_muted(self.palette),
            )
        })
    }

    fn key_hints(&self) -> Line<'static> {
        let p = self.palette;
        let focus_hint: &[(&str, &str)] = match self.state.focus {
            FocusField::ErrorInput => &[],
            FocusField::ModelSelector => &[("←→", "Model")],
            FocusField::Links => &[("↑↓", "Select"), ("Enter", "Open")],
        };
        let common: [(&str, &str); 4] =
            [("^S", "Submit"), ("Tab", "Focus"), ("^T", "Theme"), ("Esc", "Quit")];

        let mut spans = Vec::new();
        for (key, action) in focus_hint.iter().chain(common.iter()) {
            spans.push(Span::styled(key.to_string(), styles::keybinding(p)));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted(p)));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.palette.background));

        let separator = Span::styled(" │ ", styles::text_muted(self.palette));
        let mut segments = vec![Span::raw(" "), self.state_indicator()];
        if let Some(at) = self.settled_at() {
            segments.push(separator);
            segments.push(at);
        }
        let left = Line::from(segments);
        let left_width = left.width() as u16;
        buf.set_line(area.x, area.y, &left, area.width);

        let hints = self.key_hints();
        let hints_width = hints.width() as u16;
        if left_width + hints_width < area.width {
            buf.set_line(area.right() - hints_width, area.y, &hints, hints_width);
        }
    }
}
