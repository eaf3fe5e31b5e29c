//! Main update function - handles state transitions (TEA pattern)
//!
//! Server round trips (load, generate, save, browser hand-off) live in
//! the `backend` submodule; this file routes the rest.

use tracing::{debug, warn};

use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus};

use super::{backend, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::DismissDialog => {
            state.dismiss_dialog();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Editor Messages
        // ─────────────────────────────────────────────────────────
        Message::Editor(op) => {
            if state.editor.apply(op) {
                state.note_edit();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus and Tab Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleFocus => {
            state.focus = match state.focus {
                Focus::Editor => Focus::Results,
                Focus::Results => Focus::Editor,
            };
            UpdateResult::none()
        }

        Message::SelectTab(tab) => {
            state.results.active_tab = tab;
            UpdateResult::none()
        }

        Message::NextTab => {
            state.results.active_tab = state.results.active_tab.next();
            UpdateResult::none()
        }

        Message::PrevTab => {
            state.results.active_tab = state.results.active_tab.prev();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Results Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            if let Some(scroll) = state.results.active_scroll_mut() {
                scroll.scroll_up(1);
            }
            UpdateResult::none()
        }

        Message::ScrollDown => {
            if let Some(scroll) = state.results.active_scroll_mut() {
                scroll.scroll_down(1);
            }
            UpdateResult::none()
        }

        Message::ScrollPageUp => {
            if let Some(scroll) = state.results.active_scroll_mut() {
                scroll.page_up();
            }
            UpdateResult::none()
        }

        Message::ScrollPageDown => {
            if let Some(scroll) = state.results.active_scroll_mut() {
                scroll.page_down();
            }
            UpdateResult::none()
        }

        Message::ScrollToTop => {
            if let Some(scroll) = state.results.active_scroll_mut() {
                scroll.to_top();
            }
            UpdateResult::none()
        }

        Message::ScrollToBottom => {
            if let Some(scroll) = state.results.active_scroll_mut() {
                scroll.to_bottom();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Log Panel Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleLogPanel => {
            state.log_panel.toggle();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Server File Messages
        // ─────────────────────────────────────────────────────────
        Message::RequestReload => backend::handle_request_reload(state),
        Message::ReloadConfirmed => backend::handle_reload_confirmed(state),
        Message::FileLoaded { document } => backend::handle_file_loaded(state, document),
        Message::FileLoadFailed { message } => backend::handle_file_load_failed(state, &message),

        // ─────────────────────────────────────────────────────────
        // Generation Messages
        // ─────────────────────────────────────────────────────────
        Message::RequestGenerate => backend::handle_request_generate(state),
        Message::GenerateFinished {
            request_id,
            outcome,
        } => backend::handle_generate_finished(state, request_id, outcome),

        // ─────────────────────────────────────────────────────────
        // Save Messages
        // ─────────────────────────────────────────────────────────
        Message::RequestSave => backend::handle_request_save(state),
        Message::SaveConfirmed => backend::handle_save_confirmed(state),

        Message::SaveCompleted => {
            debug!("Spec file saved");
            state.modified_since_save = false;
            UpdateResult::none()
        }

        // Save failures are logged only; no user-visible surface
        Message::SaveFailed { message } => {
            warn!("Failed to save spec file: {message}");
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Browser Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenDocs => backend::handle_open_docs(state),
    }
}
