//! Multi-line error text area

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use stackexplain_app::ErrorInput;

use crate::theme::{styles, Palette};

const PLACEHOLDER: &str = "Paste your error message or stack trace here...";

/// Error text area with caret tracking
pub struct ErrorInputView<'a> {
    input: &'a ErrorInput,
    palette: &'a Palette,
    focused: bool,
}

impl<'a> ErrorInputView<'a> {
    pub fn new(input: &'a ErrorInput, palette: &'a Palette, focused: bool) -> Self {
        Self {
            input,
            palette,
            focused,
        }
    }

    /// Caret row and display column relative to the text origin
    fn caret(&self) -> (u16, u16) {
        let (row, col) = self.input.cursor_position();
        let line = self.input.text().split('\n').nth(row).unwrap_or("");
        let prefix: String = line.chars().take(col).collect();
        (
            u16::try_from(row).unwrap_or(u16::MAX),
            u16::try_from(prefix.width()).unwrap_or(u16::MAX),
        )
    }

    /// Scroll offsets that keep the caret inside `inner`
    fn scroll(&self, inner: Rect) -> (u16, u16) {
        let (row, col) = self.caret();
        (
            row.saturating_sub(inner.height.saturating_sub(1)),
            col.saturating_sub(inner.width.saturating_sub(1)),
        )
    }

    /// Terminal position for the hardware cursor, if focused
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let inner = styles::glass_block(self.palette, true).inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let (row, col) = self.caret();
        let (scroll_y, scroll_x) = self.scroll(inner);
        Some(Position::new(
            inner.x + col - scroll_x,
            inner.y + row - scroll_y,
        ))
    }
}

impl Widget for ErrorInputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, self.focused)
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("Error Message", styles::label(p)),
                Span::raw(" "),
            ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.input.is_empty() {
            Paragraph::new(Span::styled(PLACEHOLDER, styles::text_muted(p))).render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .input
            .text()
            .split('\n')
            .map(|line| Line::styled(line, styles::text_primary(p)))
            .collect();

        Paragraph::new(lines)
            .scroll(self.scroll(inner))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn area() -> Rect {
        Rect::new(0, 0, 40, 5)
    }

    #[test]
    fn test_placeholder_when_empty() {
        let input = ErrorInput::new();
        let mut term = TestTerminal::with_size(60, 5);
        term.render_widget(
            ErrorInputView::new(&input, &Palette::LIGHT, true),
            term.area(),
        );

        assert!(term.buffer_contains("Error Message"));
        assert!(term.buffer_contains("Paste your error message"));
    }

    #[test]
    fn test_renders_multiline_text() {
        let input = ErrorInput::with_text("TypeError: x\n  at main.js:3");
        let mut term = TestTerminal::with_size(40, 5);
        term.render_widget(
            ErrorInputView::new(&input, &Palette::DARK, false),
            term.area(),
        );

        assert!(term.buffer_contains("TypeError: x"));
        assert!(term.buffer_contains("at main.js:3"));
    }

    #[test]
    fn test_cursor_only_when_focused() {
        let input = ErrorInput::with_text("abc");
        let view = ErrorInputView::new(&input, &Palette::LIGHT, false);
        assert!(view.cursor_position(area()).is_none());
    }

    #[test]
    fn test_cursor_follows_text() {
        let input = ErrorInput::with_text("ab\ncd");
        let view = ErrorInputView::new(&input, &Palette::LIGHT, true);

        // Caret sits after "cd" on the second line, inside the border
        assert_eq!(view.cursor_position(area()), Some(Position::new(3, 2)));
    }

    #[test]
    fn test_scrolls_to_keep_caret_visible() {
        let input = ErrorInput::with_text("1\n2\n3\n4\n5\n6");
        let view = ErrorInputView::new(&input, &Palette::LIGHT, true);

        // Three text rows inside a 5-row box: caret stays on the last one
        let pos = view.cursor_position(area()).unwrap();
        assert_eq!(pos.y, 3);
    }
}
