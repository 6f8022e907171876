//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the application state, the message channel that input
//! sources feed, and the broadcast channel of domain events.

use tokio::sync::{broadcast, mpsc};
use tracing::{info, trace};

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppState, Tab};
use devperf_core::{Filters, MetricCategory};

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    filters: Filters,
    page: usize,
    total_pages: usize,
    selection: Option<usize>,
    category: MetricCategory,
    tab: Tab,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            filters: state.filters(),
            page: state.page(),
            total_pages: state.total_pages(),
            selection: state.selection_index(),
            category: state.carousel.active(),
            tab: state.active_tab,
        }
    }
}

/// Orchestration engine for the dashboard.
///
/// Encapsulates all shared state between TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Event broadcasting for external consumers
pub struct Engine {
    /// Application state (the TEA model)
    pub state: AppState,

    /// Sender half of the message channel (clone for input sources)
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel
    pub msg_rx: mpsc::Receiver<Message>,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create a new Engine from settings.
    ///
    /// Generates the fixture set, creates the message channel (capacity 256)
    /// and spawns the OS signal handler. Must be called inside a tokio
    /// runtime.
    pub fn new(settings: Settings) -> Self {
        let engine = Self::from_state(AppState::with_settings(settings));
        signals::spawn_signal_handler(engine.msg_tx.clone());
        info!(
            "Engine started with {} device records",
            engine.state.records().len()
        );
        engine
    }

    /// Wrap an existing state without spawning any tasks.
    pub fn from_state(state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);
        Self {
            state,
            msg_tx,
            msg_rx,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Emits EngineEvents based on state changes detected by comparing
    /// before/after snapshots.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);
        process::process_message(&mut self.state, msg);
        let post = StateSnapshot::capture(&self.state);

        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Notify subscribers that the engine is going away.
    pub fn shutdown(&self) {
        info!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.filters != post.filters {
            self.emit(EngineEvent::FiltersChanged {
                filters: post.filters,
                matching: self.state.filtered_count(),
            });
        }

        if pre.page != post.page || pre.total_pages != post.total_pages {
            self.emit(EngineEvent::PageChanged {
                page: post.page,
                total_pages: post.total_pages,
            });
        }

        if pre.selection != post.selection {
            let record = self.state.selected_record();
            self.emit(EngineEvent::SelectionChanged {
                device_id: record.map(|r| r.id.clone()),
                model: record.map(|r| r.model.clone()),
            });
        }

        if pre.category != post.category {
            self.emit(EngineEvent::CategoryChanged {
                category: post.category,
            });
        }

        if pre.tab != post.tab {
            self.emit(EngineEvent::TabChanged { tab: post.tab });
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() returns Err only if there are no receivers.
    fn emit(&self, event: EngineEvent) {
        trace!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}
