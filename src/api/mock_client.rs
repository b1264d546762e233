use super::client::WorkflowTransport;
use super::error::TransportError;
use crate::types::{WorkflowRequest, WorkflowResponse, WorkflowStatus};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const MOCK_URL: &str = "mock://workflow";

/// Scripted transport: replays queued outcomes in order and records every
/// request it receives.
#[derive(Clone, Default)]
pub struct MockWorkflowClient {
    outcomes: Arc<Mutex<VecDeque<Result<WorkflowResponse, u16>>>>,
    requests: Arc<Mutex<Vec<WorkflowRequest>>>,
}

impl MockWorkflowClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, workflow_id: &str, response: &str, status: WorkflowStatus) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(WorkflowResponse {
            workflow_id: Some(workflow_id.to_string()),
            response: response.to_string(),
            status,
            context: None,
        }));
        self
    }

    pub fn reply_with(self, response: WorkflowResponse) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn fail_with_status(self, status: u16) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(status));
        self
    }

    pub fn requests(&self) -> Vec<WorkflowRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkflowTransport for MockWorkflowClient {
    async fn chat(
        &self,
        query: &str,
        workflow_id: Option<&str>,
    ) -> Result<WorkflowResponse, TransportError> {
        self.requests.lock().unwrap().push(WorkflowRequest {
            workflow_id: workflow_id.map(str::to_string),
            query: query.to_string(),
        });
        let next = self.outcomes.lock().unwrap().pop_front();
        match next {
            Some(Ok(response)) => Ok(response),
            Some(Err(status)) => Err(TransportError::Status {
                url: MOCK_URL.to_string(),
                status,
            }),
            None => Err(TransportError::Status {
                url: MOCK_URL.to_string(),
                status: 503,
            }),
        }
    }
}
