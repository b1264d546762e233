use super::error::TransportError;
use super::logging::{emit_debug_payload, emit_response_summary};
use crate::config::Config;
use crate::types::{WorkflowRequest, WorkflowResponse};
use anyhow::Result;
use async_trait::async_trait;

/// The one call the conversation needs from the outside world.
///
/// `workflow_id` is `None` to start a new workflow, or the id returned by a
/// previous `clarification_required` reply to continue it. Implementations
/// issue exactly one request per call: no retries, no timeout.
#[async_trait]
pub trait WorkflowTransport: Send + Sync {
    async fn chat(
        &self,
        query: &str,
        workflow_id: Option<&str>,
    ) -> Result<WorkflowResponse, TransportError>;
}

#[derive(Clone)]
pub struct WorkflowClient {
    http: reqwest::Client,
    api_url: String,
    debug_payload: bool,
}

impl WorkflowClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            debug_payload: config.debug_payload,
        })
    }

    pub fn with_url(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            debug_payload: false,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl WorkflowTransport for WorkflowClient {
    async fn chat(
        &self,
        query: &str,
        workflow_id: Option<&str>,
    ) -> Result<WorkflowResponse, TransportError> {
        let payload = WorkflowRequest {
            workflow_id: workflow_id.map(str::to_string),
            query: query.to_string(),
        };
        if self.debug_payload {
            emit_debug_payload(&self.api_url, &payload);
        }

        let response = self
            .http
            .post(&self.api_url)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|error| TransportError::from_reqwest(error, &self.api_url))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.api_url, status = status.as_u16(), "workflow call rejected");
            return Err(TransportError::Status {
                url: self.api_url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| TransportError::from_reqwest(error, &self.api_url))?;
        if self.debug_payload {
            emit_response_summary(&self.api_url, status.as_u16(), body.len());
        }

        serde_json::from_slice(&body).map_err(|source| TransportError::Decode {
            url: self.api_url.clone(),
            source,
        })
    }
}
