use thiserror::Error;

/// Every way a workflow call can fail. The conversation treats all of them
/// the same; the variants exist for logs and for tests.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("workflow endpoint '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("cannot reach workflow endpoint '{url}': {source}")]
    Connect { url: String, source: reqwest::Error },
    #[error("workflow request to '{url}' failed: {source}")]
    Request { url: String, source: reqwest::Error },
    #[error("workflow endpoint '{url}' returned an unreadable body: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

impl TransportError {
    pub(crate) fn from_reqwest(error: reqwest::Error, url: &str) -> Self {
        if let Some(status) = error.status() {
            return Self::Status {
                url: url.to_string(),
                status: status.as_u16(),
            };
        }
        if error.is_connect() {
            return Self::Connect {
                url: url.to_string(),
                source: error,
            };
        }
        Self::Request {
            url: url.to_string(),
            source: error,
        }
    }

    /// HTTP status for failures the server answered, `None` for network and
    /// decode failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
