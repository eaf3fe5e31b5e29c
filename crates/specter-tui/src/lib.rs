//! specter-tui - Terminal UI for Specter
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! terminal lifecycle and the event loop, converts crossterm events into
//! application messages, and renders `AppState` from specter-app as a
//! pure function of state.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
