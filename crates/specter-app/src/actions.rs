//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! The HTTP client is blocking, so every server call runs inside
//! `spawn_blocking`; completions come back over the message channel and
//! re-enter the update loop like any other message. The channel send is
//! allowed to fail silently because the loop may already have shut down.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error};

use specter_backend::BackendClient;
use specter_core::GenerateOutcome;

use crate::browser;
use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    client: Arc<BackendClient>,
    msg_tx: mpsc::Sender<Message>,
) {
    match action {
        UpdateAction::FetchFile => {
            tokio::spawn(async move {
                let result = tokio::task::spawn_blocking(move || client.fetch_file()).await;
                let message = match result {
                    Ok(Ok(document)) => Message::FileLoaded { document },
                    Ok(Err(e)) => Message::FileLoadFailed {
                        message: e.to_string(),
                    },
                    Err(e) => Message::FileLoadFailed {
                        message: format!("fetch task failed: {e}"),
                    },
                };
                let _ = msg_tx.send(message).await;
            });
        }

        UpdateAction::Generate { text, request_id } => {
            tokio::spawn(async move {
                let result = tokio::task::spawn_blocking(move || client.generate(&text)).await;
                // Transport errors terminate the attempt as a failure so the
                // state machine never hangs in Requesting.
                let outcome = match result {
                    Ok(Ok(outcome)) => outcome,
                    Ok(Err(e)) => GenerateOutcome::failure(e.to_string()),
                    Err(e) => GenerateOutcome::failure(format!("generate task failed: {e}")),
                };
                let _ = msg_tx
                    .send(Message::GenerateFinished {
                        request_id,
                        outcome,
                    })
                    .await;
            });
        }

        UpdateAction::Save { text } => {
            tokio::spawn(async move {
                let result = tokio::task::spawn_blocking(move || client.save(&text)).await;
                let message = match result {
                    Ok(Ok(())) => Message::SaveCompleted,
                    Ok(Err(e)) => Message::SaveFailed {
                        message: e.to_string(),
                    },
                    Err(e) => Message::SaveFailed {
                        message: format!("save task failed: {e}"),
                    },
                };
                let _ = msg_tx.send(message).await;
            });
        }

        UpdateAction::OpenBrowser { url } => {
            tokio::spawn(async move {
                debug!(url = url.as_str(), "Opening documentation in browser");
                if let Err(e) = browser::open_in_browser(&url) {
                    error!("Failed to open documentation in browser: {e}");
                }
            });
        }
    }
}
