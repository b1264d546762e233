use super::state::{ConversationState, SubmitRejected, TurnOutcome};
use crate::api::WorkflowTransport;
use std::sync::Arc;

/// A conversation bound to a transport, for callers that can simply await
/// each turn (line mode, tests). The TUI drives `ConversationState`
/// directly so the network call does not block its event loop.
pub struct ChatSession {
    transport: Arc<dyn WorkflowTransport>,
    state: ConversationState,
}

impl ChatSession {
    pub fn new(transport: Arc<dyn WorkflowTransport>) -> Self {
        Self {
            transport,
            state: ConversationState::new(),
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub async fn send_message(
        &mut self,
        text: impl Into<String>,
    ) -> Result<TurnOutcome, SubmitRejected> {
        let pending = self.state.begin_turn(text)?;
        let result = self
            .transport
            .chat(&pending.query, pending.workflow_id.as_deref())
            .await;
        Ok(self.state.complete_turn(result))
    }
}
