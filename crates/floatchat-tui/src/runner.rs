//! Main TUI runner - entry point and event loop

use floatchat_app::config::Settings;
use floatchat_app::Engine;
use floatchat_core::prelude::*;

use super::{event, render, terminal};

/// Run the interactive TUI until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings);

    let mut term = ratatui::init();
    info!("Terminal initialized");

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI exited with error: {}", e);
    }
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Replies and signals arrive over the message channel
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
