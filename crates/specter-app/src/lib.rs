//! specter-app - Application state and orchestration for Specter
//!
//! This crate implements the TEA (The Elm Architecture) pattern for
//! state management: messages in, pure state transitions, side effects
//! described as actions and executed by spawned tasks.

pub mod actions;
pub mod browser;
pub mod config;
pub mod confirm_dialog;
pub mod editor;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use confirm_dialog::ConfirmDialogState;
pub use editor::EditorState;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{EditorOp, Message};
pub use process::process_message;
pub use state::{AppPhase, AppState, Focus, RequestPhase, ResultTab};
