//! Main TUI runner - entry point and event loop

use std::time::Duration;

use avellon_app::config::Settings;
use avellon_app::message::Message;
use avellon_app::process::process_message;
use avellon_app::signals;
use avellon_app::AppState;
use avellon_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the console until the user quits or a shutdown signal arrives
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms);
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let mut state = AppState::with_settings(settings);
    info!("AVELLON console starting on {}", state.session().current_page);

    // Unified channel for messages from outside the terminal
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    let signal_task = signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, tick_rate);

    signal_task.abort();
    ratatui::restore();

    match &result {
        Ok(()) => info!("AVELLON console exited"),
        Err(e) => error!("AVELLON console failed: {}", e),
    }
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    tick_rate: Duration,
) -> Result<()> {
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll(tick_rate)? {
            process_message(state, message);
        }
    }

    Ok(())
}
