//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widget and full-screen tests can make
//! plain text and color assertions against the rendered buffer.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere (within one row)
    pub fn buffer_contains(&self, text: &str) -> bool {
        (0..self.buffer().area.height).any(|y| line_content(self.buffer(), y).0.contains(text))
    }

    /// Cell coordinates of the first character of `text`, scanning rows top-down
    pub fn find_text(&self, text: &str) -> Option<(u16, u16)> {
        let buffer = self.buffer();
        (0..buffer.area.height).find_map(|y| {
            let (content, offsets) = line_content(buffer, y);
            let byte = content.find(text)?;
            offsets
                .iter()
                .find(|(start, _)| *start == byte)
                .map(|(_, x)| (*x, y))
        })
    }

    pub fn cell_bg(&self, x: u16, y: u16) -> Color {
        self.buffer()[(x, y)].bg
    }

    pub fn cell_fg(&self, x: u16, y: u16) -> Color {
        self.buffer()[(x, y)].fg
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        (0..self.buffer().area.height)
            .map(|y| line_content(self.buffer(), y).0)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Row text plus the byte offset at which each cell's symbol starts
fn line_content(buffer: &Buffer, y: u16) -> (String, Vec<(usize, u16)>) {
    let mut content = String::new();
    let mut offsets = Vec::new();
    for x in 0..buffer.area.width {
        offsets.push((content.len(), x));
        content.push_str(buffer[(x, y)].symbol());
    }
    (content, offsets)
}
