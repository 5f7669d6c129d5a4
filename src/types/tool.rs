//! Tool-calling definitions for the structured-call extraction protocol.
//!
//! These mirror the OpenAI-style function-calling shapes spoken by
//! Ollama-compatible backends. A declaration is built per request from one
//! schema and never reused across requests with different schemas.

use serde::{Deserialize, Serialize};

/// Tool definition (for function calling)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub tool_type: String, // "function"
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value, // JSON Schema
}

/// Tool invocation returned by the model.
///
/// Arguments are untrusted until the adapter validates them against the
/// schema that produced the declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub arguments: serde_json::Value,
}
