pub mod client;
pub mod error;
mod logging;
#[cfg(test)]
pub mod mock_client;

pub use client::{WorkflowClient, WorkflowTransport};
pub use error::TransportError;
