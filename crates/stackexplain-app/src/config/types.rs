//! Configuration types for StackExplain
//!
//! Defines `Settings` (the `config.toml` file) and its sections.

use serde::{Deserialize, Serialize};
use stackexplain_client::DEFAULT_BACKEND_URL;
use stackexplain_core::ModelChoice;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where and how to reach the explanation service
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Full URL of the explain endpoint
    #[serde(default = "default_backend_url")]
    pub url: String,

    /// Include the selected model identifier in the request body
    #[serde(default = "default_true")]
    pub send_model: bool,

    /// Request timeout; unset means wait indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            send_model: true,
            timeout_secs: None,
        }
    }
}

/// Presentation defaults
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Start with the dark palette
    #[serde(default)]
    pub dark_mode: bool,

    /// Model preselected in the selector
    #[serde(default)]
    pub default_model: ModelChoice,

    /// Command used to open links; empty = platform default opener
    #[serde(default)]
    pub browser: String,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_true() -> bool {
    true
}
