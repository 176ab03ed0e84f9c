//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use stackexplain_client::ExplainBackend;

/// Process a message through the TEA update function.
///
/// Follow-up messages are handled in the same call; actions are spawned
/// as background tasks that report back through `msg_tx`.
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
) where
    B: ExplainBackend + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), backend.clone());
        }

        msg = result.message;
    }
}
