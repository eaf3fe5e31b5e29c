//! Server round-trip handlers (load, generate, save, docs hand-off)

use tracing::{debug, info, warn};

use specter_backend::swagger_url;
use specter_core::{GenerateOutcome, SpecDocument};

use crate::confirm_dialog::ConfirmDialogState;
use crate::state::{AppPhase, AppState};

use super::{UpdateAction, UpdateResult};

/// Re-fetch the document, asking first when local edits would be lost.
pub(crate) fn handle_request_reload(state: &mut AppState) -> UpdateResult {
    if state.modified_since_save {
        state.confirm_dialog_state = Some(ConfirmDialogState::reload_confirmation());
        UpdateResult::none()
    } else {
        UpdateResult::action(UpdateAction::FetchFile)
    }
}

pub(crate) fn handle_reload_confirmed(state: &mut AppState) -> UpdateResult {
    state.dismiss_dialog();
    UpdateResult::action(UpdateAction::FetchFile)
}

pub(crate) fn handle_file_loaded(state: &mut AppState, document: SpecDocument) -> UpdateResult {
    info!(
        path = document.path.as_deref().unwrap_or("<none>"),
        bytes = document.text.len(),
        "Spec file loaded"
    );
    state.load_document(document);
    UpdateResult::none()
}

/// A failed fetch still enters normal operation with an empty buffer.
/// The error is surfaced in the log panel rather than left to a blank
/// loading screen.
pub(crate) fn handle_file_load_failed(state: &mut AppState, message: &str) -> UpdateResult {
    warn!("Failed to load spec file: {message}");
    state.phase = AppPhase::Ready;
    state.log_panel.record_error(message);
    UpdateResult::none()
}

/// Dispatch a generate request unless the availability guard blocks it.
pub(crate) fn handle_request_generate(state: &mut AppState) -> UpdateResult {
    match state.begin_generate() {
        Some(request_id) => {
            debug!(request_id, "Dispatching generate request");
            UpdateResult::action(UpdateAction::Generate {
                text: state.editor.text(),
                request_id,
            })
        }
        None => {
            debug!("Generate skipped, buffer unchanged since last result");
            UpdateResult::none()
        }
    }
}

/// Apply a generate completion, discarding it when a newer request has
/// been issued since this one was dispatched.
pub(crate) fn handle_generate_finished(
    state: &mut AppState,
    request_id: u64,
    outcome: GenerateOutcome,
) -> UpdateResult {
    if !state.is_current_request(request_id) {
        debug!(request_id, "Discarding stale generate response");
        return UpdateResult::none();
    }
    match outcome {
        GenerateOutcome::Success(artifacts) => {
            info!(
                request_id,
                swagger_id = artifacts.swagger_id.as_str(),
                "Generation succeeded"
            );
            let docs_url = swagger_url(state.server_url(), &artifacts.swagger_id);
            state.apply_generate_success(artifacts, docs_url);
        }
        GenerateOutcome::Failure { message } => {
            warn!(request_id, "Generation failed: {message}");
            state.apply_generate_failure(&message);
        }
    }
    UpdateResult::none()
}

/// Open the overwrite confirmation. Without a server-side path there is
/// nothing to overwrite and the request is ignored.
pub(crate) fn handle_request_save(state: &mut AppState) -> UpdateResult {
    let Some(path) = state.document_path.as_deref() else {
        debug!("Save skipped, document has no server path");
        return UpdateResult::none();
    };
    state.confirm_dialog_state = Some(ConfirmDialogState::save_confirmation(Some(path)));
    UpdateResult::none()
}

pub(crate) fn handle_save_confirmed(state: &mut AppState) -> UpdateResult {
    state.dismiss_dialog();
    UpdateResult::action(UpdateAction::Save {
        text: state.editor.text(),
    })
}

/// Hand the rendered-doc URL to the system browser, if one exists yet.
pub(crate) fn handle_open_docs(state: &mut AppState) -> UpdateResult {
    match &state.results.docs_url {
        Some(url) => UpdateResult::action(UpdateAction::OpenBrowser { url: url.clone() }),
        None => {
            debug!("No documentation URL yet, generate first");
            UpdateResult::none()
        }
    }
}
