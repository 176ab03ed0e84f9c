//! StackExplain - paste an error, get an explanation
//!
//! This is the binary entry point. All logic lives in the library.

use std::io::IsTerminal;
use std::time::Duration;

use clap::Parser;
use stackexplain::headless::{self, OutputFormat};
use stackexplain::Cli;
use stackexplain_app::config;
use stackexplain_app::AppState;
use stackexplain_client::{parse_endpoint, HttpExplainClient};
use stackexplain_core::logging;
use stackexplain_core::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    let cli = Cli::parse();

    logging::init()?;
    info!("Version {}", env!("CARGO_PKG_VERSION"));

    if cli.init_config {
        let dir = config::default_config_dir()
            .ok_or_else(|| Error::config("No config directory on this platform"))?;
        let path = config::init_config_dir(&dir).context("writing default config")?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut settings = config::load_user_settings();
    cli.apply_to(&mut settings);

    // Reject a bad URL before touching the terminal
    let endpoint = parse_endpoint(&settings.backend.url)?;
    let timeout = settings.backend.timeout_secs.map(Duration::from_secs);
    let backend = HttpExplainClient::new(endpoint, timeout)?;

    if cli.wants_headless(std::io::stdin().is_terminal()) {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Bullets
        };
        let text = headless::read_error_text(cli.error.clone())?;

        // Same payload rules as the form
        let mut state = AppState::with_settings(settings);
        state.input.insert_str(&text);
        return headless::run(&backend, state.build_request(), format).await;
    }

    stackexplain_tui::run(settings, backend).await
}
