//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEvent, MouseEventKind};
use devperf_app::message::Message;
use devperf_app::InputKey;
use devperf_core::prelude::*;
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Horizontal wheel movement drives the carousel.
///
/// Terminals without a horizontal wheel report Shift+vertical scroll instead.
pub fn mouse_event_to_message(mouse: MouseEvent) -> Option<Message> {
    let shifted = mouse.modifiers.contains(KeyModifiers::SHIFT);
    match mouse.kind {
        MouseEventKind::ScrollRight => Some(Message::CarouselWheel { forward: true }),
        MouseEventKind::ScrollLeft => Some(Message::CarouselWheel { forward: false }),
        MouseEventKind::ScrollDown if shifted => Some(Message::CarouselWheel { forward: true }),
        MouseEventKind::ScrollUp if shifted => Some(Message::CarouselWheel { forward: false }),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;

        match event {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(key_event_to_input(key).map(Message::Key))
            }
            Event::Mouse(mouse) => Ok(mouse_event_to_message(mouse)),
            _ => Ok(None),
        }
    } else {
        // Tick on timeout drives the carousel animation
        Ok(Some(Message::Tick))
    }
}
