//! Terminal event handling
//!
//! Converts crossterm events into library-independent `InputKey` values at
//! the TUI boundary so the rest of the application never sees crossterm
//! types.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use specter_app::message::Message;
use specter_app::InputKey;
use specter_core::prelude::*;

/// Convert a crossterm key event into an `InputKey`.
///
/// Returns `None` for keys the application does not handle.
pub fn key_event_to_input(key: event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                Some(InputKey::CharCtrl(c))
            } else {
                Some(InputKey::Char(c))
            }
        }
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                Some(InputKey::BackTab)
            } else {
                Some(InputKey::Tab)
            }
        }
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        _ => None,
    }
}

/// Poll for the next terminal event within the tick budget.
///
/// Release and repeat key events are swallowed so a key press only fires
/// once. When the budget elapses without input a `Message::Tick` is
/// produced to drive animations.
pub fn poll(tick_budget: Duration) -> Result<Option<Message>> {
    if event::poll(tick_budget)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(key_event_to_input(key).map(Message::Key))
            }
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick))
    }
}
