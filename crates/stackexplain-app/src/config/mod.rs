//! Configuration file parsing for StackExplain
//!
//! Supports `<config_dir>/stackexplain/config.toml` with `[backend]` and
//! `[ui]` sections. Command-line flags override file values.

pub mod settings;
pub mod types;

pub use settings::{
    config_file_path, default_config_dir, init_config_dir, load_settings, load_user_settings,
};
pub use types::*;
