//! TUI runner
//!
//! Owns the terminal lifecycle and the event loop. The loop drains
//! completions from background tasks, draws one frame, then polls for
//! input; everything else happens in specter-app's update layer.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use specter_app::actions::handle_action;
use specter_app::message::Message;
use specter_app::state::AppState;
use specter_app::{process_message, Settings, UpdateAction};
use specter_backend::BackendClient;
use specter_core::prelude::*;

use crate::{event, render, terminal};

/// Capacity of the completion channel. Only background task results
/// travel through it; key events are handled synchronously.
const CHANNEL_CAPACITY: usize = 256;

/// Run the UI against the generator named in `settings`.
///
/// Blocks until the user quits, restoring the terminal on the way out.
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let timeout = Duration::from_secs(settings.server.timeout_secs);
    let client = Arc::new(BackendClient::new(&settings.server.url, timeout)?);
    info!("Using generator at {}", settings.server.url);

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

    // Kick off the initial document fetch; the reply re-enters the loop
    // as FileLoaded or FileLoadFailed.
    handle_action(UpdateAction::FetchFile, Arc::clone(&client), msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client);

    ratatui::restore();
    info!("Terminal restored");
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: &Arc<BackendClient>,
) -> Result<()> {
    let tick_budget = Duration::from_millis(state.settings.ui.tick_rate_ms);

    while !state.should_quit() {
        // Drain completions from background tasks
        while let Ok(message) = msg_rx.try_recv() {
            process_message(state, message, client, &msg_tx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll(tick_budget)? {
            process_message(state, message, client, &msg_tx);
        }
    }

    info!("Quit requested, leaving event loop");
    Ok(())
}
