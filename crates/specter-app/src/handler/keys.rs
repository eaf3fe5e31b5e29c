//! Key event handlers for focus modes and dialogs

use crate::confirm_dialog::ConfirmDialogState;
use crate::input_key::InputKey;
use crate::message::{EditorOp, Message};
use crate::state::{AppPhase, AppState, Focus, ResultTab};

/// Convert key events to messages based on phase, dialog, and focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(dialog) = &state.confirm_dialog_state {
        return handle_key_confirm_dialog(dialog, key);
    }
    if state.phase == AppPhase::Loading {
        return handle_key_loading(key);
    }
    // Global chords win over pane-local bindings
    if let Some(msg) = handle_key_global(&key) {
        return Some(msg);
    }
    match state.focus {
        Focus::Editor => handle_key_editor(key),
        Focus::Results => handle_key_results(state, key),
    }
}

/// Handle key events while a confirmation dialog is open
fn handle_key_confirm_dialog(dialog: &ConfirmDialogState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => dialog.confirm_message(),
        InputKey::Char('n' | 'N') | InputKey::Esc => dialog.decline_message(),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while waiting for the initial document fetch
fn handle_key_loading(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c' | 'q') => Some(Message::Quit),
        _ => None,
    }
}

/// Chords available regardless of pane focus
fn handle_key_global(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('g') => Some(Message::RequestGenerate),
        InputKey::CharCtrl('s') => Some(Message::RequestSave),
        InputKey::CharCtrl('r') => Some(Message::RequestReload),
        InputKey::CharCtrl('l') => Some(Message::ToggleLogPanel),
        InputKey::CharCtrl('o') => Some(Message::ToggleFocus),
        InputKey::CharCtrl('q' | 'c') => Some(Message::RequestQuit),
        _ => None,
    }
}

/// Handle key events while the editor pane has focus
fn handle_key_editor(key: InputKey) -> Option<Message> {
    let op = match key {
        InputKey::Char(c) => EditorOp::InsertChar(c),
        InputKey::Enter => EditorOp::InsertNewline,
        InputKey::Tab => EditorOp::InsertIndent,
        InputKey::Backspace => EditorOp::DeleteBackward,
        InputKey::Delete => EditorOp::DeleteForward,
        InputKey::Left => EditorOp::MoveLeft,
        InputKey::Right => EditorOp::MoveRight,
        InputKey::Up => EditorOp::MoveUp,
        InputKey::Down => EditorOp::MoveDown,
        InputKey::Home => EditorOp::MoveLineStart,
        InputKey::End => EditorOp::MoveLineEnd,
        InputKey::PageUp => EditorOp::PageUp,
        InputKey::PageDown => EditorOp::PageDown,
        _ => return None,
    };
    Some(Message::Editor(op))
}

/// Handle key events while the results pane has focus
fn handle_key_results(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Char('h') => Some(Message::PrevTab),
        InputKey::Right | InputKey::Char('l') => Some(Message::NextTab),
        InputKey::BackTab => Some(Message::PrevTab),
        InputKey::Tab => Some(Message::NextTab),
        InputKey::Char('1') => Some(Message::SelectTab(ResultTab::RenderedDoc)),
        InputKey::Char('2') => Some(Message::SelectTab(ResultTab::RawSpec)),
        InputKey::Char('3') => Some(Message::SelectTab(ResultTab::ExportDoc)),
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::ScrollPageUp),
        InputKey::PageDown => Some(Message::ScrollPageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        InputKey::Char('o') if state.results.active_tab == ResultTab::RenderedDoc => {
            Some(Message::OpenDocs)
        }
        InputKey::Esc => Some(Message::ToggleFocus),
        _ => None,
    }
}
