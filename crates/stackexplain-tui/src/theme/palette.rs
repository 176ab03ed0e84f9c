//! Color palettes for the light and dark themes.

use ratatui::style::Color;

/// Every color the widgets use, resolved once per frame from `dark_mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    /// Text drawn on top of `accent`
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub status_red: Color,
    pub status_yellow: Color,
    pub status_green: Color,

    // --- Links ---
    pub link: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(246, 248, 250),
        card_bg: Color::Rgb(255, 255, 255),
        border_dim: Color::Rgb(208, 215, 222),
        border_active: Color::Rgb(9, 105, 218),
        accent: Color::Rgb(9, 105, 218),
        contrast_fg: Color::Rgb(255, 255, 255),
        text_primary: Color::Rgb(31, 35, 40),
        text_secondary: Color::Rgb(87, 96, 106),
        text_muted: Color::Rgb(140, 149, 159),
        status_red: Color::Rgb(207, 34, 46),
        status_yellow: Color::Rgb(154, 103, 0),
        status_green: Color::Rgb(26, 127, 55),
        link: Color::Rgb(9, 105, 218),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(10, 12, 16),
        card_bg: Color::Rgb(18, 21, 28),
        border_dim: Color::Rgb(45, 51, 59),
        border_active: Color::Rgb(88, 166, 255),
        accent: Color::Rgb(88, 166, 255),
        contrast_fg: Color::Rgb(10, 12, 16),
        text_primary: Color::Rgb(201, 209, 217),
        text_secondary: Color::Rgb(125, 133, 144),
        text_muted: Color::Rgb(72, 79, 88),
        status_red: Color::Rgb(244, 63, 94),
        status_yellow: Color::Rgb(234, 179, 8),
        status_green: Color::Rgb(16, 185, 129),
        link: Color::Rgb(56, 189, 248),
    };

    pub fn for_mode(dark_mode: bool) -> &'static Palette {
        if dark_mode {
            &Self::DARK
        } else {
            &Self::LIGHT
        }
    }
}
