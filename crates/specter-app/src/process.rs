//! Message processing loop (TEA)

use std::sync::Arc;

use tokio::sync::mpsc;

use specter_backend::BackendClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, dispatching any
/// resulting action and draining follow-up messages until the chain
/// settles.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    client: &Arc<BackendClient>,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, Arc::clone(client), msg_tx.clone());
        }

        msg = result.message;
    }
}
