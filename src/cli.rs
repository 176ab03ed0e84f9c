//! Command-line arguments and their effect on the loaded settings

use clap::Parser;

use stackexplain_app::config::Settings;
use stackexplain_core::ModelChoice;

/// StackExplain - paste an error, get an explanation
#[derive(Parser, Debug)]
#[command(name = "stackexplain", version)]
#[command(about = "Explain error messages with an LLM backend", long_about = None)]
pub struct Cli {
    /// Error message to explain; implies headless mode
    #[arg(value_name = "ERROR")]
    pub error: Option<String>,

    /// Model to use: deepseek (default), gemini, mistral, or a full model id
    #[arg(long, value_name = "MODEL")]
    pub model: Option<ModelChoice>,

    /// Explain endpoint, e.g. http://localhost:8000/explain
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Print one explanation and exit instead of opening the TUI
    #[arg(long)]
    pub headless: bool,

    /// Headless output as JSON instead of bullet lines
    #[arg(long)]
    pub json: bool,

    /// Start with the dark theme
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Start with the light theme
    #[arg(long)]
    pub light: bool,

    /// Write a default config file (if missing), print its path and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Cli {
    /// Overlay flags onto file settings; flags win
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(model) = self.model {
            settings.ui.default_model = model;
        }
        if let Some(url) = &self.backend_url {
            settings.backend.url = url.clone();
        }
        if self.dark {
            settings.ui.dark_mode = true;
        } else if self.light {
            settings.ui.dark_mode = false;
        }
    }

    /// Headless when asked for, when an error was passed inline, or when
    /// stdin is piped
    pub fn wants_headless(&self, stdin_is_terminal: bool) -> bool {
        self.headless || self.error.is_some() || !stdin_is_terminal
    }
}
