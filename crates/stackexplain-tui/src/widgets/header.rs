//! Header bar widget
//!
//! App title on the left, theme indicator pill on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Palette};

/// Main header showing the app title and the active theme
pub struct MainHeader<'a> {
    palette: &'a Palette,
    dark_mode: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(palette: &'a Palette, dark_mode: bool) -> Self {
        Self { palette, dark_mode }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("StackExplain", styles::label(p)),
            Span::raw("  "),
            Span::styled("Paste an error, get an explanation", styles::text_muted(p)),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let (icon, name) = if self.dark_mode {
            ("☾", "Dark")
        } else {
            ("☀", "Light")
        };
        let pill = Line::from(vec![
            Span::styled(format!("{} {}", icon, name), styles::text_secondary(p)),
            Span::styled(" [", styles::text_muted(p)),
            Span::styled("^T", styles::keybinding(p)),
            Span::styled("] ", styles::text_muted(p)),
        ]);
        let pill_width = pill.width() as u16;
        let title_width = title.width() as u16;

        // Pill is dropped on narrow terminals rather than overlapping the title
        if title_width + pill_width + 1 <= inner.width {
            let x = inner.x + inner.width - pill_width;
            buf.set_line(x, inner.y, &pill, pill_width);
        }
    }
}
