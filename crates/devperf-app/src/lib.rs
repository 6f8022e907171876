//! devperf-app - Application state and orchestration for the dashboard
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the scroll-sync controller for the metric carousel, the Engine
//! abstraction shared by the TUI and headless runners, and configuration
//! loading.

pub mod carousel;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use carousel::{category_at_offset, CarouselState};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, FilterRow, Focus, Tab};
