use crate::client::config::ClassifierConfig;
use crate::error::Error;
use crate::transport::{ChatBackend, ChatRequest};
use crate::types::result::{ClassificationResult, SchemaListing};
use crate::{adapter, normalize, prompt, schema};
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use uuid::Uuid;

/// Per-call overrides. Anything left unset falls back to the classifier's
/// configuration, so changing a model for one request never mutates shared
/// state.
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    pub schema_name: Option<String>,
    pub model_id: Option<String>,
    pub temperature: Option<f64>,
    pub timeout: Option<Duration>,
}

impl ClassifyOptions {
    pub fn schema(mut self, name: impl Into<String>) -> Self {
        self.schema_name = Some(name.into());
        self
    }

    pub fn model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// The classification facade.
///
/// Composes registry, prompt builder, tool adapter, backend, and normalizer
/// behind [`classify`](Classifier::classify). Immutable after construction and
/// safe for concurrent use; each call owns its request, declaration, and
/// result.
pub struct Classifier {
    config: ClassifierConfig,
    backend: Arc<dyn ChatBackend>,
}

impl Classifier {
    pub(crate) fn new(config: ClassifierConfig, backend: Arc<dyn ChatBackend>) -> Self {
        Self { config, backend }
    }

    /// The configuration this classifier was built with.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one input text.
    ///
    /// Never fails and never panics: every error raised anywhere in the
    /// pipeline (unknown schema, missing field, no tool invocation, timeout,
    /// unreachable backend) is folded into a failure envelope whose
    /// `latency_ms` reflects time-to-failure.
    pub async fn classify(&self, input_text: &str, options: ClassifyOptions) -> ClassificationResult {
        let started = Instant::now();
        let request_id = Uuid::new_v4();

        let schema_name = options
            .schema_name
            .unwrap_or_else(|| schema::DEFAULT_SCHEMA.to_string());
        let model_id = options
            .model_id
            .unwrap_or_else(|| self.config.model_id.clone());
        let temperature = options.temperature.unwrap_or(self.config.temperature);
        let timeout = options.timeout.unwrap_or(self.config.timeout);

        let outcome = self
            .run(input_text, &schema_name, &model_id, temperature, timeout)
            .await;
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        match outcome {
            Ok(arguments) => {
                info!(
                    %request_id,
                    schema = %schema_name,
                    model = %model_id,
                    latency_ms,
                    "classification succeeded"
                );
                ClassificationResult::success(arguments, schema_name, model_id, latency_ms)
            }
            Err(err) => {
                warn!(
                    %request_id,
                    schema = %schema_name,
                    model = %model_id,
                    latency_ms,
                    error = %err,
                    "classification failed"
                );
                ClassificationResult::failure(schema_name, model_id, latency_ms, err)
            }
        }
    }

    /// List all registered schemas plus the default, for client-facing
    /// discovery.
    pub fn list_schemas(&self) -> SchemaListing {
        SchemaListing {
            available_schemas: schema::schema_names()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_schema: schema::DEFAULT_SCHEMA.to_string(),
        }
    }

    // One prompt build, one backend round trip, one normalization. Any error
    // short-circuits straight to the failure envelope in `classify`.
    async fn run(
        &self,
        input_text: &str,
        schema_name: &str,
        model_id: &str,
        temperature: f64,
        timeout: Duration,
    ) -> crate::Result<Map<String, Value>> {
        if input_text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let schema = schema::resolve(schema_name)?;
        let prompt = prompt::build_prompt(input_text, schema);
        let tool = adapter::declare(schema);

        let request = ChatRequest {
            model: model_id.to_string(),
            prompt,
            temperature,
            tool,
        };

        let response = match tokio::time::timeout(timeout, self.backend.chat(request)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(Error::Timeout {
                    elapsed_ms: timeout.as_millis() as u64,
                })
            }
        };

        let call = response
            .tool_calls
            .into_iter()
            .next()
            .ok_or(Error::NoToolInvocation)?;

        normalize::normalize_arguments(schema, &call.arguments)
    }
}
