//! Semantic style builders over a [`Palette`].

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

/// Field labels in the results panel
pub fn label(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .add_modifier(Modifier::BOLD)
}

pub fn link(p: &Palette) -> Style {
    Style::default()
        .fg(p.link)
        .add_modifier(Modifier::UNDERLINED)
}

// --- Status styles ---
pub fn status_red(p: &Palette) -> Style {
    Style::default().fg(p.status_red).add_modifier(Modifier::BOLD)
}

pub fn status_yellow(p: &Palette) -> Style {
    Style::default()
        .fg(p.status_yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn status_green(p: &Palette) -> Style {
    Style::default().fg(p.status_green)
}

// --- Keybinding hint style ---
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.status_yellow)
}

/// Highlighted entry in a focused list or selector
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// Highlighted entry while its control is not focused
pub fn unfocused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Style::default().fg(p.border_active)
        } else {
            Style::default().fg(p.border_dim)
        })
        .style(Style::default().bg(p.card_bg))
}
