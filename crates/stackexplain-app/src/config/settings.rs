//! Settings parser for `<config_dir>/stackexplain/config.toml`

use super::types::Settings;
use stackexplain_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "stackexplain";

/// Per-user configuration directory, e.g. `~/.config/stackexplain`
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR))
}

/// Path of the settings file inside `config_dir`
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILENAME)
}

/// Load settings from `config_dir/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_file_path(config_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from the default per-user location
pub fn load_user_settings() -> Settings {
    match default_config_dir() {
        Some(dir) => load_settings(&dir),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Write a commented default `config.toml` if none exists.
///
/// Returns the path of the (new or existing) file.
pub fn init_config_dir(config_dir: &Path) -> Result<PathBuf> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = config_file_path(config_dir);
    if !config_path.exists() {
        let default_content = r#"# StackExplain Configuration

[backend]
url = "http://localhost:8000/explain"
send_model = true       # Include the selected model in the request
# timeout_secs = 60     # Unset = wait for the backend indefinitely

[ui]
dark_mode = false
default_model = "deepseek"   # deepseek | gemini | mistral
browser = ""                 # Empty = platform default opener
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config file: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}
