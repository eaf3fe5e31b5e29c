//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `backend`: Server round-trip handlers (load, generate, save)
//! - `keys`: Key event handlers for focus modes and dialogs

pub(crate) mod backend;
pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch the spec document from the server
    FetchFile,

    /// Submit the buffer text to the generation endpoint.
    /// The id ties the eventual completion message back to this dispatch.
    Generate { text: String, request_id: u64 },

    /// Persist the buffer text to the save endpoint
    Save { text: String },

    /// Open a URL with the platform browser opener.
    /// Fire-and-forget OS call; failures are logged only.
    OpenBrowser { url: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
