use crate::client::config::ClassifierConfig;
use crate::client::core::Classifier;
use crate::transport::{ChatBackend, HttpBackend};
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating classifiers with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct ClassifierBuilder {
    config: ClassifierConfig,
    backend: Option<Arc<dyn ChatBackend>>,
}

impl ClassifierBuilder {
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default(),
            backend: None,
        }
    }

    /// Start from environment configuration (`OLLAMA_BASE_URL`, `MODEL_ID`,
    /// `TEMPERATURE`, `CLASSIFIER_TIMEOUT_MS`).
    pub fn from_env() -> Self {
        Self {
            config: ClassifierConfig::from_env(),
            backend: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the backend base URL.
    ///
    /// This is primarily for testing with mock servers; in production the
    /// URL comes from configuration.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the default model identifier.
    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.config.model_id = model_id.into();
        self
    }

    /// Set the default sampling temperature.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.config.temperature = temperature;
        self
    }

    /// Set the default per-call deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Inject a custom backend (in-memory backends for tests, alternative
    /// transports). Default is the HTTP backend for the configured base URL.
    pub fn backend(mut self, backend: Arc<dyn ChatBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Build the classifier. Immutable once built; safe to share across
    /// concurrent calls.
    pub fn build(self) -> Result<Classifier> {
        let backend = match self.backend {
            Some(backend) => backend,
            None => Arc::new(HttpBackend::new(&self.config.base_url)?),
        };
        Ok(Classifier::new(self.config, backend))
    }
}

impl Default for ClassifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}
