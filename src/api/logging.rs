use crate::types::WorkflowRequest;

pub fn emit_debug_payload(request_url: &str, payload: &WorkflowRequest) {
    let formatted_payload = serde_json::to_string_pretty(payload)
        .unwrap_or_else(|_| "<payload serialization error>".to_string());
    tracing::debug!(
        target: "wfchat::payload",
        url = request_url,
        "workflow request payload:\n{formatted_payload}"
    );
}

pub fn emit_response_summary(request_url: &str, status: u16, body_len: usize) {
    tracing::debug!(
        target: "wfchat::payload",
        url = request_url,
        status,
        body_len,
        "workflow response received"
    );
}
