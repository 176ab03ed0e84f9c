//! stackexplain-tui - Terminal UI for StackExplain
//!
//! Renders the form with ratatui, converts crossterm events into app
//! messages, and drives the TEA loop from `stackexplain-app`.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
