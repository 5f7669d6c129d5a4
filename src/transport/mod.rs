//! Backend transport: the single suspension point of a classification call.
//!
//! [`ChatBackend`] is the seam that keeps the inference backend opaque to the
//! core: one prompt plus one declared tool out, one response in. The HTTP
//! implementation speaks the Ollama-compatible `/api/chat` surface; tests
//! substitute in-memory backends.

pub mod http;

pub use http::HttpBackend;

use crate::types::tool::{ToolCall, ToolDefinition};
use async_trait::async_trait;

/// One outbound inference exchange: a prompt and the structured-call
/// declaration constraining the answer.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f64,
    pub tool: ToolDefinition,
}

/// The backend's reply. `tool_calls` may be empty if the model answered in
/// prose instead of invoking the declared call.
#[derive(Debug, Clone, Default)]
pub struct ChatResponse {
    pub content: String,
    pub tool_calls: Vec<ToolCall>,
}

/// Request/response exchange with an inference backend.
///
/// Implementations issue exactly one request per call and perform no retries;
/// retry policy, if desired, belongs to the caller.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn chat(&self, request: ChatRequest) -> crate::Result<ChatResponse>;
}
