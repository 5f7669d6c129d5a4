use crate::error::Error;
use crate::transport::{ChatBackend, ChatRequest, ChatResponse};
use crate::types::tool::{ToolCall, ToolDefinition};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use url::Url;

/// HTTP backend for Ollama-compatible `/api/chat` endpoints.
///
/// The per-call deadline is enforced by the facade; this client only carries a
/// connect timeout so an unreachable host fails fast instead of hanging.
pub struct HttpBackend {
    client: reqwest::Client,
    chat_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> crate::Result<Self> {
        let base = Url::parse(base_url).map_err(|e| {
            Error::configuration(format!("invalid backend base URL '{base_url}': {e}"))
        })?;
        let chat_url = base
            .join("/api/chat")
            .map_err(|e| Error::configuration(format!("cannot derive chat endpoint: {e}")))?;

        // Minimal production-friendly defaults (env-overridable).
        let connect_timeout_secs = env::var("CLASSIFIER_HTTP_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(10);

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .pool_max_idle_per_host(
                env::var("CLASSIFIER_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(8),
            )
            .build()
            .map_err(|e| Error::backend(e.to_string()))?;

        Ok(Self { client, chat_url })
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn chat(&self, request: ChatRequest) -> crate::Result<ChatResponse> {
        let body = WireChatRequest {
            model: &request.model,
            messages: [WireMessage {
                role: "user",
                content: &request.prompt,
            }],
            tools: [&request.tool],
            stream: false,
            options: WireOptions {
                temperature: request.temperature,
            },
        };

        let response = self
            .client
            .post(self.chat_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::backend(format!(
                "backend returned HTTP {status}: {}",
                truncate(&detail, 200)
            )));
        }

        let reply: WireChatReply = response
            .json()
            .await
            .map_err(|e| Error::backend(format!("malformed backend response: {e}")))?;

        Ok(reply.into_response())
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[derive(Serialize)]
struct WireChatRequest<'a> {
    model: &'a str,
    messages: [WireMessage<'a>; 1],
    tools: [&'a ToolDefinition; 1],
    stream: bool,
    options: WireOptions,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct WireOptions {
    temperature: f64,
}

#[derive(Deserialize, Default)]
struct WireChatReply {
    #[serde(default)]
    message: WireReplyMessage,
}

impl WireChatReply {
    fn into_response(self) -> ChatResponse {
        ChatResponse {
            content: self.message.content,
            tool_calls: self
                .message
                .tool_calls
                .into_iter()
                .map(|tc| ToolCall {
                    name: tc.function.name,
                    arguments: parse_arguments(tc.function.arguments),
                })
                .collect(),
        }
    }
}

#[derive(Deserialize, Default)]
struct WireReplyMessage {
    #[serde(default)]
    content: String,
    #[serde(default)]
    tool_calls: Vec<WireToolCall>,
}

#[derive(Deserialize)]
struct WireToolCall {
    function: WireFunctionCall,
}

#[derive(Deserialize)]
struct WireFunctionCall {
    name: String,
    #[serde(default)]
    arguments: serde_json::Value,
}

/// Some backends return arguments as a JSON-encoded string instead of an
/// object. Tolerant: parse when possible, keep the raw value otherwise.
fn parse_arguments(raw: serde_json::Value) -> serde_json::Value {
    if let serde_json::Value::String(s) = &raw {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
                return v;
            }
        }
    }
    raw
}
