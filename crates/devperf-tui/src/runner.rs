//! Main TUI runner - entry point and event loop

use devperf_app::config::Settings;
use devperf_app::Engine;
use devperf_core::prelude::*;

use super::{event, render, terminal};

/// Run the dashboard in the terminal until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings);

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse() {
        warn!("Mouse capture unavailable, wheel scrolling disabled: {}", e);
    }

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    terminal::disable_mouse();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Process external messages (signal handler)
        engine.drain_pending_messages();

        // Render
        terminal
            .draw(|frame| render::view(frame, &mut engine.state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
