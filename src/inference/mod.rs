//! Inference service abstraction.
//!
//! Each chain stage is one request/response exchange. The trait is the seam
//! between the pipeline and the network so tests can substitute a stub that
//! replays canned stage output.

pub mod models;

pub use models::ModelsClient;

use crate::error::Result;

/// One chat-completion exchange, fully parameterized
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model identifier
    pub model: String,
    /// System role message
    pub system: String,
    /// User role message
    pub user: String,
    /// Sampling temperature for this stage
    pub temperature: f64,
    /// Nucleus-sampling parameter (the chain pins this at 1.0)
    pub top_p: f64,
    /// Ask the service to return a single JSON object
    pub json_object: bool,
}

/// Completion client trait - implement for each inference backend
pub trait CompletionClient {
    /// Send one request and return the assistant message text.
    fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
