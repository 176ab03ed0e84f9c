//! Model selector row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use stackexplain_core::ModelChoice;

use crate::theme::{styles, Palette};

/// Horizontal picker over the model catalogue
pub struct ModelSelector<'a> {
    selected: ModelChoice,
    palette: &'a Palette,
    focused: bool,
}

impl<'a> ModelSelector<'a> {
    pub fn new(selected: ModelChoice, palette: &'a Palette, focused: bool) -> Self {
        Self {
            selected,
            palette,
            focused,
        }
    }
}

impl Widget for ModelSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, self.focused).title(Line::from(vec![
            Span::raw(" "),
            Span::styled("Model", styles::label(p)),
            Span::raw(" "),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, model) in ModelChoice::ALL.iter().enumerate() {
            let text = format!(" {} {} ", i + 1, model.label());
            let style = match (*model == self.selected, self.focused) {
                (true, true) => styles::focused_selected(p),
                (true, false) => styles::unfocused_selected(p),
                (false, _) => styles::text_secondary(p),
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }
        let choices = Line::from(spans);
        buf.set_line(inner.x, inner.y, &choices, inner.width);

        // Full identifier, right-aligned when it fits
        let id = Line::from(Span::styled(
            format!("{} ", self.selected.id()),
            styles::text_muted(p),
        ));
        let id_width = id.width() as u16;
        if choices.width() as u16 + id_width < inner.width {
            buf.set_line(inner.right() - id_width, inner.y, &id, id_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_lists_every_model() {
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(
            ModelSelector::new(ModelChoice::DeepSeek, &Palette::LIGHT, false),
            term.area(),
        );

        for model in ModelChoice::ALL {
            assert!(term.buffer_contains(model.label()));
        }
        assert!(term.buffer_contains(ModelChoice::DeepSeek.id()));
    }

    #[test]
    fn test_selected_model_is_highlighted_when_focused() {
        let p = &Palette::DARK;
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(ModelSelector::new(ModelChoice::Gemini, p, true), term.area());

        let (x, y) = term
            .find_text("Gemini")
            .expect("Gemini label should be rendered");
        assert_eq!(term.cell_bg(x, y), p.accent);
    }
}
