//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget
//! lives in specter-tui.

use crate::message::Message;

/// Modal confirmation prompt with labelled outcomes.
///
/// `options[0]` is the affirmative choice and `options[1]` the
/// declining one; the key handler dispatches whichever message the
/// user picks.
#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Message sent when the user accepts the dialog
    pub fn confirm_message(&self) -> Option<Message> {
        self.options.first().map(|(_, msg)| msg.clone())
    }

    /// Message sent when the user declines or dismisses the dialog
    pub fn decline_message(&self) -> Option<Message> {
        self.options.get(1).map(|(_, msg)| msg.clone())
    }

    /// Dialog shown before overwriting the spec file on the server
    pub fn save_confirmation(path: Option<&str>) -> Self {
        let message = match path {
            Some(path) => format!("Overwrite file {}?", path),
            None => "Overwrite the spec file on the server?".to_string(),
        };
        Self::new(
            "Save Spec",
            message,
            vec![
                ("Overwrite", Message::SaveConfirmed),
                ("Cancel", Message::DismissDialog),
            ],
        )
    }

    /// Dialog shown before quitting with unsaved edits
    pub fn quit_confirmation() -> Self {
        Self::new(
            "Quit Specter?",
            "The spec buffer has unsaved changes.",
            vec![
                ("Quit", Message::ConfirmQuit),
                ("Cancel", Message::DismissDialog),
            ],
        )
    }

    /// Dialog shown before re-fetching the file over local edits
    pub fn reload_confirmation() -> Self {
        Self::new(
            "Reload From Server?",
            "Local edits will be discarded.",
            vec![
                ("Reload", Message::ReloadConfirmed),
                ("Cancel", Message::DismissDialog),
            ],
        )
    }
}
