use crate::api::TransportError;
use crate::types::WorkflowResponse;

/// Messages delivered to the UI loop from background tasks.
#[derive(Debug)]
pub enum UiUpdate {
    TurnFinished(Result<WorkflowResponse, TransportError>),
}
