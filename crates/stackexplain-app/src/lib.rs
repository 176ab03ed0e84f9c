//! # stackexplain-app - Application State and Orchestration
//!
//! The form's state machine, written in the TEA (The Elm Architecture)
//! style: every input becomes a [`Message`], [`handler::update`] applies it
//! to [`AppState`], and side effects come back as [`UpdateAction`]s that
//! [`process::process_message`] spawns as background tasks.
//!
//! ## Public API
//! - [`AppState`] - Form contents, selected model, last response, theme
//! - [`Message`] / [`RequestId`] - Inputs to the state machine
//! - [`UpdateAction`] / [`UpdateResult`] - Side effects requested by `update`
//! - [`InputKey`] - Terminal-independent key events
//! - [`config`] - `config.toml` loading and saving

pub mod actions;
pub mod config;
pub mod error_input;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

pub use error_input::ErrorInput;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, RequestId};
pub use state::{AppPhase, AppState, FocusField, RequestPhase};
