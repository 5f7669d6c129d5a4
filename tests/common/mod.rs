//! Shared in-memory backends for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use intent_classifier::{ChatBackend, ChatRequest, ChatResponse, ToolCall};
use serde_json::json;
use std::time::Duration;

/// Backend that returns one scripted response, after an optional delay.
pub struct MockBackend {
    response: ChatResponse,
    delay: Option<Duration>,
}

impl MockBackend {
    /// Reply with a single `classify_text` invocation carrying `arguments`.
    pub fn with_arguments(arguments: serde_json::Value) -> Self {
        Self {
            response: ChatResponse {
                content: String::new(),
                tool_calls: vec![ToolCall {
                    name: "classify_text".to_string(),
                    arguments,
                }],
            },
            delay: None,
        }
    }

    /// Reply with prose only, no tool invocation.
    pub fn without_tool_calls() -> Self {
        Self {
            response: ChatResponse {
                content: "I think this is a prompt.".to_string(),
                tool_calls: Vec::new(),
            },
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    async fn chat(&self, _request: ChatRequest) -> intent_classifier::Result<ChatResponse> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.response.clone())
    }
}

/// Fake model that applies the prompt's own linguistic rules to the input
/// embedded in the prompt, so end-to-end scenarios exercise the full
/// prompt → tool-call → normalization path.
pub struct RuleBackend;

impl RuleBackend {
    fn embedded_input(prompt: &str) -> Option<&str> {
        let marker = "**Input to classify:** \"";
        let start = prompt.find(marker)? + marker.len();
        let rest = &prompt[start..];
        let end = rest.find('"')?;
        Some(&rest[..end])
    }

    fn decide(input: &str) -> (&'static str, f64) {
        let lower = input.to_lowercase();
        // Questions stay prompts even when they contain action verbs.
        if lower.trim_end().ends_with('?') {
            return ("prompt", 0.9);
        }
        let multi_step = [" and ", " then ", " also ", " with ", " plus "]
            .iter()
            .any(|marker| lower.contains(marker));
        if multi_step {
            ("workflow", 0.85)
        } else {
            ("prompt", 0.8)
        }
    }
}

#[async_trait]
impl ChatBackend for RuleBackend {
    async fn chat(&self, request: ChatRequest) -> intent_classifier::Result<ChatResponse> {
        let input = Self::embedded_input(&request.prompt).unwrap_or_default();
        let (classification, confidence) = Self::decide(input);
        Ok(ChatResponse {
            content: String::new(),
            tool_calls: vec![ToolCall {
                name: request.tool.function.name,
                arguments: json!({"type": classification, "confidence": confidence}),
            }],
        })
    }
}
