//! StackExplain - paste an error, get an explanation
//!
//! Binary-level glue: command-line parsing and the headless one-shot mode.
//! The form itself lives in the workspace crates:
//! - `stackexplain-core`: records, model catalogue, errors, logging
//! - `stackexplain-client`: HTTP client for the explain endpoint
//! - `stackexplain-app`: TEA state machine and configuration
//! - `stackexplain-tui`: ratatui front end

pub mod cli;
pub mod headless;

pub use cli::Cli;
