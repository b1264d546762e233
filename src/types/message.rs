use super::api::{WorkflowResponse, WorkflowStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

/// Details of the workflow reply an assistant message came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    pub status: WorkflowStatus,
    pub record_count: usize,
    pub top_score: Option<f64>,
}

impl ResponseMeta {
    pub fn from_response(response: &WorkflowResponse) -> Self {
        Self {
            status: response.status,
            record_count: response.record_count(),
            top_score: response.top_score(),
        }
    }

    /// Footer shown under the message, if there is anything worth showing.
    pub fn summary(&self) -> Option<String> {
        let matches = match (self.record_count, self.top_score) {
            (0, _) => None,
            (1, Some(score)) => Some(format!("1 match · best score {score:.2}")),
            (count, Some(score)) => Some(format!("{count} matches · best score {score:.2}")),
            (count, None) => Some(format!("{count} matches")),
        };
        match (self.status, matches) {
            (WorkflowStatus::Error, Some(matches)) => Some(format!("workflow error · {matches}")),
            (WorkflowStatus::Error, None) => Some("workflow error".to_string()),
            (_, matches) => matches,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            meta: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            meta: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            meta: None,
        }
    }

    pub fn from_workflow_response(response: &WorkflowResponse) -> Self {
        Self {
            role: Role::Assistant,
            content: response.response.clone(),
            meta: Some(ResponseMeta::from_response(response)),
        }
    }

    pub fn is_workflow_error(&self) -> bool {
        self.meta
            .as_ref()
            .is_some_and(|meta| meta.status == WorkflowStatus::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScoredRecord;
    use serde_json::json;

    fn response(status: WorkflowStatus, scores: &[f64]) -> WorkflowResponse {
        WorkflowResponse {
            workflow_id: Some("wf-1".to_string()),
            response: "ok".to_string(),
            status,
            context: if scores.is_empty() {
                None
            } else {
                Some(
                    scores
                        .iter()
                        .map(|score| ScoredRecord {
                            record: json!({}),
                            score: *score,
                        })
                        .collect(),
                )
            },
        }
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Message::system("x")).expect("serialize"),
            json!({"role": "system", "content": "x"})
        );
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn summary_reports_matches_and_errors() {
        let meta = ResponseMeta::from_response(&response(WorkflowStatus::Completed, &[0.6, 0.912]));
        assert_eq!(meta.summary().as_deref(), Some("2 matches · best score 0.91"));

        let meta = ResponseMeta::from_response(&response(WorkflowStatus::Completed, &[0.5]));
        assert_eq!(meta.summary().as_deref(), Some("1 match · best score 0.50"));

        let meta = ResponseMeta::from_response(&response(WorkflowStatus::ClarificationRequired, &[]));
        assert_eq!(meta.summary(), None);

        let meta = ResponseMeta::from_response(&response(WorkflowStatus::Error, &[]));
        assert_eq!(meta.summary().as_deref(), Some("workflow error"));
    }

    #[test]
    fn workflow_error_flag_follows_meta_status() {
        let message = Message::from_workflow_response(&response(WorkflowStatus::Error, &[]));
        assert_eq!(message.role, Role::Assistant);
        assert!(message.is_workflow_error());
        assert!(!Message::assistant("plain").is_workflow_error());
    }
}
