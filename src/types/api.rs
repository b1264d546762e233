use serde::{Deserialize, Serialize};

/// Body of `POST /api/workflow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRequest {
    pub workflow_id: Option<String>,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    ClarificationRequired,
    Completed,
    /// The backend spells this `failed`; both forms are accepted.
    #[serde(alias = "failed")]
    Error,
}

impl WorkflowStatus {
    pub fn expects_continuation(self) -> bool {
        matches!(self, Self::ClarificationRequired)
    }
}

/// One retrieved record the workflow based its answer on. The record body is
/// kept as raw JSON since its shape depends on the workflow's intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub record: serde_json::Value,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResponse {
    #[serde(default)]
    pub workflow_id: Option<String>,
    pub response: String,
    pub status: WorkflowStatus,
    #[serde(default)]
    pub context: Option<Vec<ScoredRecord>>,
}

impl WorkflowResponse {
    pub fn record_count(&self) -> usize {
        self.context.as_ref().map_or(0, Vec::len)
    }

    pub fn top_score(&self) -> Option<f64> {
        self.context
            .as_ref()?
            .iter()
            .map(|scored| scored.score)
            .fold(None, |best, score| match best {
                Some(best) if best >= score => Some(best),
                _ => Some(score),
            })
    }
}
