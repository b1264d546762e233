use crate::api::TransportError;
use crate::types::{Message, WorkflowResponse, WorkflowStatus};
use thiserror::Error;

/// Shown in place of a reply whenever the workflow call fails.
pub const APOLOGY_MESSAGE: &str = "Sorry, I couldn't process your request";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    #[default]
    Idle,
    AwaitingResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("nothing to send")]
    Empty,
    #[error("still waiting for the previous reply")]
    Busy,
}

/// What the transport needs to run one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub query: String,
    pub workflow_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Completed,
    ClarificationRequired,
    WorkflowError,
    TransportFailed,
    /// A result arrived with no turn pending and was discarded.
    NotPending,
}

/// Owned conversation: the chronological message log, the continuation
/// token for a workflow awaiting clarification, and whether a reply is
/// pending. Messages are only ever appended.
#[derive(Debug, Default)]
pub struct ConversationState {
    messages: Vec<Message>,
    workflow_id: Option<String>,
    phase: TurnPhase,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn workflow_id(&self) -> Option<&str> {
        self.workflow_id.as_deref()
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.phase == TurnPhase::AwaitingResponse
    }

    pub fn begin_turn(&mut self, text: impl Into<String>) -> Result<PendingTurn, SubmitRejected> {
        let text = text.into();
        if text.is_empty() {
            return Err(SubmitRejected::Empty);
        }
        if self.is_awaiting_response() {
            return Err(SubmitRejected::Busy);
        }

        self.messages.push(Message::user(text.clone()));
        self.phase = TurnPhase::AwaitingResponse;
        tracing::debug!(
            continuing = self.workflow_id.is_some(),
            messages = self.messages.len(),
            "turn started"
        );

        Ok(PendingTurn {
            query: text,
            workflow_id: self.workflow_id.clone(),
        })
    }

    pub fn complete_turn(
        &mut self,
        result: Result<WorkflowResponse, TransportError>,
    ) -> TurnOutcome {
        if !self.is_awaiting_response() {
            tracing::warn!("turn completion arrived with no turn pending");
            return TurnOutcome::NotPending;
        }
        self.phase = TurnPhase::Idle;

        match result {
            Ok(response) => {
                self.messages.push(Message::from_workflow_response(&response));
                let outcome = match response.status {
                    WorkflowStatus::ClarificationRequired => TurnOutcome::ClarificationRequired,
                    WorkflowStatus::Completed => TurnOutcome::Completed,
                    WorkflowStatus::Error => TurnOutcome::WorkflowError,
                };
                self.workflow_id = if response.status.expects_continuation() {
                    response.workflow_id
                } else {
                    None
                };
                tracing::info!(
                    ?outcome,
                    workflow_id = self.workflow_id.as_deref().unwrap_or("-"),
                    "turn finished"
                );
                outcome
            }
            Err(error) => {
                tracing::error!(%error, status = ?error.status(), "workflow call failed");
                self.messages.push(Message::system(APOLOGY_MESSAGE));
                self.workflow_id = None;
                TurnOutcome::TransportFailed
            }
        }
    }
}
