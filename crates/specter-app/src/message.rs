//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::ResultTab;
use specter_core::{GenerateOutcome, SpecDocument};

/// Editing operation applied to the spec buffer.
///
/// Produced by the key handler while the editor pane has focus and
/// consumed by `EditorState::apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOp {
    /// Insert a printable character at the cursor
    InsertChar(char),
    /// Split the current line at the cursor
    InsertNewline,
    /// Insert soft indentation (spaces) at the cursor
    InsertIndent,
    /// Delete the character before the cursor, joining lines at column 0
    DeleteBackward,
    /// Delete the character under the cursor, joining lines at end of line
    DeleteForward,
    /// Move cursor one column left
    MoveLeft,
    /// Move cursor one column right
    MoveRight,
    /// Move cursor one row up
    MoveUp,
    /// Move cursor one row down
    MoveDown,
    /// Move cursor to the start of the current line
    MoveLineStart,
    /// Move cursor to the end of the current line
    MoveLineEnd,
    /// Move cursor up one viewport page
    PageUp,
    /// Move cursor down one viewport page
    PageDown,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (busy phrase rotation)
    Tick,

    /// Request to quit (may show confirmation dialog if unsaved edits exist)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Close the active confirmation dialog without acting
    DismissDialog,

    // ─────────────────────────────────────────────────────────
    // Editor Messages
    // ─────────────────────────────────────────────────────────
    /// Apply an editing operation to the spec buffer
    Editor(EditorOp),

    // ─────────────────────────────────────────────────────────
    // Focus and Tab Messages
    // ─────────────────────────────────────────────────────────
    /// Toggle focus between the editor and the results pane
    ToggleFocus,
    /// Select a specific results tab
    SelectTab(ResultTab),
    /// Cycle to the next results tab
    NextTab,
    /// Cycle to the previous results tab
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Results Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the active results tab up one line
    ScrollUp,
    /// Scroll the active results tab down one line
    ScrollDown,
    /// Page up in the active results tab
    ScrollPageUp,
    /// Page down in the active results tab
    ScrollPageDown,
    /// Jump to the top of the active results tab
    ScrollToTop,
    /// Jump to the bottom of the active results tab
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Log Panel Messages
    // ─────────────────────────────────────────────────────────
    /// Expand or collapse the log panel
    ToggleLogPanel,

    // ─────────────────────────────────────────────────────────
    // Server File Messages
    // ─────────────────────────────────────────────────────────
    /// Re-fetch the spec file from the server (asks first if edited)
    RequestReload,
    /// Reload confirmed from the discard-changes dialog
    ReloadConfirmed,
    /// Spec file arrived from the server
    FileLoaded { document: SpecDocument },
    /// Spec file could not be fetched
    FileLoadFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Generation Messages
    // ─────────────────────────────────────────────────────────
    /// Submit the current buffer to the generator
    RequestGenerate,
    /// Generation round trip finished (success or failure)
    GenerateFinished {
        request_id: u64,
        outcome: GenerateOutcome,
    },

    // ─────────────────────────────────────────────────────────
    // Save Messages
    // ─────────────────────────────────────────────────────────
    /// Ask to persist the buffer (shows overwrite confirmation)
    RequestSave,
    /// Save confirmed from the overwrite dialog
    SaveConfirmed,
    /// Server persisted the buffer
    SaveCompleted,
    /// Server rejected or failed the save
    SaveFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Browser Messages
    // ─────────────────────────────────────────────────────────
    /// Open the generated documentation URL in the system browser
    OpenDocs,
}
