use super::update::UiUpdate;
use crate::api::WorkflowTransport;
use crate::state::PendingTurn;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Runs one workflow call off the UI loop and reports the result as
/// `UiUpdate::TurnFinished`. A closed receiver means the UI is gone, so the
/// result is dropped.
pub fn spawn_turn(
    transport: Arc<dyn WorkflowTransport>,
    pending: PendingTurn,
    update_tx: mpsc::UnboundedSender<UiUpdate>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = transport
            .chat(&pending.query, pending.workflow_id.as_deref())
            .await;
        let _ = update_tx.send(UiUpdate::TurnFinished(result));
    })
}
