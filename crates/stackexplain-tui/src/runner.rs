//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use stackexplain_app::config::Settings;
use stackexplain_app::process::process_message;
use stackexplain_app::signals;
use stackexplain_app::{AppState, Message};
use stackexplain_client::ExplainBackend;
use stackexplain_core::prelude::*;

use crate::{event, render, terminal};

/// Run the interactive form until the user quits
pub async fn run<B>(settings: Settings, backend: B) -> Result<()>
where
    B: ExplainBackend + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = terminal::init()?;
    let mut state = AppState::with_settings(settings);
    info!(
        "TUI started (model: {}, dark mode: {})",
        state.selected_model.id(),
        state.dark_mode
    );

    // Settlements, signals and other background messages
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, Arc::new(backend));

    terminal::restore();
    info!("TUI stopped");
    result
}

/// Main event loop
fn run_loop<B>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<B>,
) -> Result<()>
where
    B: ExplainBackend + Sync + 'static,
{
    while !state.should_quit() {
        // Process background messages (settlements, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &backend);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &backend);
        }
    }

    Ok(())
}
