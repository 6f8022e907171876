//! Headless mode runner - main event loop without TUI
//!
//! Reads line commands from stdin on a blocking thread, feeds them through
//! the Engine and writes the resulting engine events to stdout as NDJSON.

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use devperf_app::config::Settings;
use devperf_app::{Engine, EngineEvent, Message};
use devperf_core::prelude::*;

use super::command::{parse_command, HeadlessCommand};
use super::HeadlessEvent;

/// Carousel viewport used when no terminal is attached
pub const HEADLESS_VIEWPORT_WIDTH: u16 = 80;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("devperf dashboard starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings);
    engine
        .state
        .carousel
        .set_viewport_width(HEADLESS_VIEWPORT_WIDTH);
    let mut events = engine.subscribe();

    // Spawn headless-specific stdin reader
    let (line_tx, line_rx) = mpsc::channel::<String>(256);
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(line_tx);
    });

    let result = match HeadlessEvent::ready(&engine.state).emit() {
        Ok(()) => headless_event_loop(&mut engine, line_rx, &mut events).await,
        Err(e) => Err(e),
    };

    engine.shutdown();
    info!("devperf headless mode exiting");
    result
}

/// Input arriving at the headless loop
enum Input {
    /// Message from the engine channel (signal handler)
    Message(Message),
    /// Raw stdin line
    Line(String),
}

/// Main headless event loop
async fn headless_event_loop(
    engine: &mut Engine,
    mut line_rx: mpsc::Receiver<String>,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Result<()> {
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        let input = tokio::select! {
            msg = engine.msg_rx.recv() => msg.map(Input::Message),
            line = line_rx.recv() => line.map(Input::Line),
        };

        match input {
            Some(Input::Message(msg)) => dispatch(engine, msg),
            Some(Input::Line(line)) => handle_line(engine, &line)?,
            None => {
                info!("Input channel closed");
                break;
            }
        }

        forward_events(events)?;
    }

    Ok(())
}

/// Parse and apply one stdin line
///
/// A rejected command becomes an `error` event; only a failed write to
/// stdout is returned as an error.
pub(crate) fn handle_line(engine: &mut Engine, line: &str) -> Result<()> {
    match parse_command(line) {
        Ok(Some(HeadlessCommand::Dispatch(msg))) => dispatch(engine, msg),
        Ok(Some(HeadlessCommand::Snapshot)) => HeadlessEvent::snapshot(&engine.state).emit()?,
        Ok(None) => {}
        Err(e) => {
            warn!("Rejected stdin command: {}", e);
            HeadlessEvent::error(e.to_string(), e.is_fatal()).emit()?;
        }
    }
    Ok(())
}

/// Process a message and run any carousel animation to completion.
///
/// Without a render loop there are no ticks, so the animation is settled
/// immediately to keep category events consistent with the TUI.
pub(crate) fn dispatch(engine: &mut Engine, msg: Message) {
    engine.process_message(msg);
    while engine.state.carousel.is_animating() {
        engine.process_message(Message::Tick);
    }
}

/// Write every pending engine event to stdout
fn forward_events(events: &mut broadcast::Receiver<EngineEvent>) -> Result<()> {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(event) = HeadlessEvent::from_engine_event(event) {
                    event.emit()?;
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless event stream lagged, {} events dropped", skipped);
            }
            Err(_) => return Ok(()),
        }
    }
}

/// Read stdin lines and hand them to the event loop (blocking version)
fn spawn_stdin_reader_blocking(line_tx: mpsc::Sender<String>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                let quit = matches!(line.trim(), "q" | "quit");
                if line_tx.blocking_send(line).is_err() {
                    break;
                }
                if quit {
                    info!("Stdin: quit requested");
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}
