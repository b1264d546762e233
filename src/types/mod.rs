mod api;
mod message;

pub use api::{ScoredRecord, WorkflowRequest, WorkflowResponse, WorkflowStatus};
pub use message::{Message, ResponseMeta, Role};
