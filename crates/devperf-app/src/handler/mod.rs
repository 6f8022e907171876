//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per tab and focus
//! - `filters`: Filter row handlers
//! - `table`: Table cursor and compare handlers
//! - `carousel`: Category selection and carousel scroll handlers

pub(crate) mod carousel;
pub(crate) mod filters;
pub(crate) mod keys;
pub(crate) mod table;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
