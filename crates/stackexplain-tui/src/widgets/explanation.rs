//! Results panel: renders the last explanation record
//!
//! Each field appears under its label only when present in the record.
//! Links get their own rows so they can be selected and opened.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use stackexplain_core::ExplanationRecord;

use crate::theme::{styles, Palette};

pub const NO_LINKS_MESSAGE: &str = "No relevant links available.";
const EMPTY_HINT: &str = "Press Ctrl+S to explain the error above.";

/// Results panel over an optional record
pub struct ExplanationPanel<'a> {
    record: Option<&'a ExplanationRecord>,
    palette: &'a Palette,
    selected_link: usize,
    links_focused: bool,
    scroll: u16,
}

impl<'a> ExplanationPanel<'a> {
    pub fn new(record: Option<&'a ExplanationRecord>, palette: &'a Palette) -> Self {
        Self {
            record,
            palette,
            selected_link: 0,
            links_focused: false,
            scroll: 0,
        }
    }

    /// Highlight link `index`; `focused` switches to the strong highlight
    pub fn selected_link(mut self, index: usize, focused: bool) -> Self {
        self.selected_link = index;
        self.links_focused = focused;
        self
    }

    pub fn scroll(mut self, rows: u16) -> Self {
        self.scroll = rows;
        self
    }

    /// Body lines, plus the line index of the selected link if any
    fn lines(&self, record: &'a ExplanationRecord) -> (Vec<Line<'a>>, Option<usize>) {
        let p = self.palette;
        let mut lines = Vec::new();
        let mut selected_line = None;

        let section = |lines: &mut Vec<Line<'a>>, label: &'static str| {
            if !lines.is_empty() {
                lines.push(Line::raw(""));
            }
            lines.push(Line::styled(label, styles::label(p)));
        };

        if let Some(error_type) = record.error_type.as_deref() {
            section(&mut lines, "Error Type");
            let style = if record.is_fallback() {
                styles::status_red(p)
            } else {
                styles::status_yellow(p)
            };
            lines.push(Line::from(vec![Span::raw("  "), Span::styled(error_type, style)]));
        }

        if let Some(explanation) = record.explanation.as_deref() {
            section(&mut lines, "Explanation");
            lines.extend(indented(explanation, styles::text_primary(p)));
        }

        if let Some(fix) = record.suggested_fix.as_deref() {
            section(&mut lines, "Suggested Fix");
            lines.extend(indented(fix, styles::status_green(p)));
        }

        if let Some(links) = record.relevant_links.as_deref() {
            section(&mut lines, "Relevant Links");
            if links.is_empty() {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(NO_LINKS_MESSAGE, styles::text_muted(p)),
                ]));
            }
            for (i, link) in links.iter().enumerate() {
                let selected = i == self.selected_link;
                if selected {
                    selected_line = Some(lines.len());
                }
                let style = match (selected, self.links_focused) {
                    (true, true) => styles::focused_selected(p),
                    (true, false) => styles::unfocused_selected(p),
                    (false, _) => styles::link(p),
                };
                let marker = if selected && self.links_focused { "▸ " } else { "• " };
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(marker, styles::text_secondary(p)),
                    Span::styled(link.as_str(), style),
                ]));
            }
        }

        (lines, selected_line)
    }

    /// Clamp the requested scroll so the last row can still reach the
    /// bottom edge, and while the links list is focused keep the
    /// highlighted link on screen. `rows[i]` is the wrapped height of line `i`.
    fn effective_scroll(&self, rows: &[u16], selected_line: Option<usize>, height: u16) -> u16 {
        let total = rows.iter().fold(0u16, |acc, r| acc.saturating_add(*r));
        let max = total.saturating_sub(height);
        let mut scroll = self.scroll.min(max);

        if let (true, Some(line)) = (self.links_focused, selected_line) {
            let top = rows[..line].iter().fold(0u16, |acc, r| acc.saturating_add(*r));
            let bottom = top.saturating_add(rows[line]);
            if top < scroll {
                scroll = top;
            } else if bottom > scroll.saturating_add(height) {
                scroll = bottom.saturating_sub(height).min(top);
            }
        }
        scroll
    }
}

/// Screen rows each line occupies once wrapped to `width`
fn wrapped_rows(lines: &[Line<'_>], width: u16) -> Vec<u16> {
    lines
        .iter()
        .map(|line| {
            let rows = Paragraph::new(line.clone())
                .wrap(Wrap { trim: false })
                .line_count(width)
                .max(1);
            u16::try_from(rows).unwrap_or(u16::MAX)
        })
        .collect()
}

fn indented<'a>(text: &'a str, style: ratatui::style::Style) -> impl Iterator<Item = Line<'a>> {
    text.lines()
        .map(move |line| Line::from(vec![Span::raw("  "), Span::styled(line, style)]))
}

impl Widget for ExplanationPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, self.links_focused).title(Line::from(vec![
            Span::raw(" "),
            Span::styled("Explanation", styles::label(p)),
            Span::raw(" "),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let Some(record) = self.record else {
            Paragraph::new(Span::styled(EMPTY_HINT, styles::text_muted(p))).render(inner, buf);
            return;
        };

        let (lines, selected_line) = self.lines(record);
        let rows = wrapped_rows(&lines, inner.width);
        let scroll = self.effective_scroll(&rows, selected_line, inner.height);

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn record(links: Option<&[&str]>) -> ExplanationRecord {
        ExplanationRecord {
            error_type: Some("TypeError".to_string()),
            explanation: Some("x is undefined".to_string()),
            suggested_fix: Some("check initialization".to_string()),
            relevant_links: links.map(|l| l.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn render(panel: ExplanationPanel) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(panel, term.area());
        term
    }

    #[test]
    fn test_hint_before_first_record() {
        let term = render(ExplanationPanel::new(None, &Palette::LIGHT));
        assert!(term.buffer_contains("Press Ctrl+S"));
        assert!(!term.buffer_contains("Error Type"));
    }

    #[test]
    fn test_all_fields_with_empty_links() {
        let rec = record(Some(&[]));
        let term = render(ExplanationPanel::new(Some(&rec), &Palette::LIGHT));

        assert!(term.buffer_contains("Error Type"));
        assert!(term.buffer_contains("TypeError"));
        assert!(term.buffer_contains("Explanation"));
        assert!(term.buffer_contains("x is undefined"));
        assert!(term.buffer_contains("Suggested Fix"));
        assert!(term.buffer_contains("check initialization"));
        assert!(term.buffer_contains("Relevant Links"));
        assert!(term.buffer_contains(NO_LINKS_MESSAGE));
    }

    #[test]
    fn test_absent_links_render_nothing() {
        let rec = record(None);
        let term = render(ExplanationPanel::new(Some(&rec), &Palette::LIGHT));

        assert!(!term.buffer_contains("Relevant Links"));
        assert!(!term.buffer_contains(NO_LINKS_MESSAGE));
    }

    #[test]
    fn test_only_present_fields_render() {
        let rec = ExplanationRecord {
            explanation: Some("only this".to_string()),
            ..Default::default()
        };
        let term = render(ExplanationPanel::new(Some(&rec), &Palette::DARK));

        assert!(term.buffer_contains("only this"));
        assert!(!term.buffer_contains("Error Type"));
        assert!(!term.buffer_contains("Suggested Fix"));
    }

    #[test]
    fn test_links_render_in_order() {
        let rec = record(Some(&["https://one.example", "https://two.example"]));
        let term = render(ExplanationPanel::new(Some(&rec), &Palette::LIGHT));

        let (_, first) = term.find_text("https://one.example").unwrap();
        let (_, second) = term.find_text("https://two.example").unwrap();
        assert!(first < second);
        assert!(!term.buffer_contains(NO_LINKS_MESSAGE));
    }

    #[test]
    fn test_focused_link_is_highlighted() {
        let p = &Palette::DARK;
        let rec = record(Some(&["https://one.example", "https://two.example"]));
        let term = render(ExplanationPanel::new(Some(&rec), p).selected_link(1, true));

        let (x, y) = term.find_text("https://two.example").unwrap();
        assert_eq!(term.cell_bg(x, y), p.accent);
        let (x, y) = term.find_text("https://one.example").unwrap();
        assert_ne!(term.cell_bg(x, y), p.accent);
    }

    #[test]
    fn test_fallback_record_renders_fixed_text() {
        let rec = ExplanationRecord::fallback();
        let mut term = TestTerminal::with_size(120, 24);
        term.render_widget(ExplanationPanel::new(Some(&rec), &Palette::LIGHT), term.area());

        assert!(term.buffer_contains("RequestError"));
        assert!(term.buffer_contains("An error occurred while contacting the server."));
        assert!(term.buffer_contains(NO_LINKS_MESSAGE));
    }

    #[test]
    fn test_scroll_hides_top_lines() {
        let rec = record(Some(&[]));
        let mut term = TestTerminal::with_size(40, 8);
        term.render_widget(
            ExplanationPanel::new(Some(&rec), &Palette::LIGHT).scroll(3),
            term.area(),
        );

        assert!(!term.buffer_contains("TypeError"));
        assert!(term.buffer_contains("x is undefined"));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let rec = record(Some(&[]));
        let term = render(ExplanationPanel::new(Some(&rec), &Palette::LIGHT).scroll(500));

        // Content fits, so nothing scrolls away
        assert!(term.buffer_contains("TypeError"));
        assert!(term.buffer_contains(NO_LINKS_MESSAGE));
    }

    #[test]
    fn test_max_scroll_reaches_fields_after_wrapped_paragraph() {
        let rec = ExplanationRecord {
            explanation: Some("word ".repeat(200)),
            suggested_fix: Some("restart the worker".to_string()),
            relevant_links: Some(vec![]),
            ..Default::default()
        };
        let mut term = TestTerminal::with_size(40, 12);
        term.render_widget(
            ExplanationPanel::new(Some(&rec), &Palette::LIGHT).scroll(u16::MAX),
            term.area(),
        );

        assert!(term.buffer_contains("restart the worker"));
        assert!(term.buffer_contains(NO_LINKS_MESSAGE));
    }

    #[test]
    fn test_focused_link_below_wrapped_paragraph_is_scrolled_into_view() {
        let rec = ExplanationRecord {
            explanation: Some("word ".repeat(200)),
            relevant_links: Some(vec!["https://one.example".into(), "https://two.example".into()]),
            ..Default::default()
        };
        let mut term = TestTerminal::with_size(40, 12);
        term.render_widget(
            ExplanationPanel::new(Some(&rec), &Palette::DARK).selected_link(1, true),
            term.area(),
        );

        assert!(term.buffer_contains("https://two.example"));
    }
}
