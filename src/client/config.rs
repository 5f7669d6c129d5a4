use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL_ID: &str = "llama3.2:3b";
pub const DEFAULT_TEMPERATURE: f64 = 0.1;
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Classifier configuration, read once at startup.
///
/// Treated as read-only after construction; per-request overrides travel in
/// [`ClassifyOptions`](crate::ClassifyOptions) instead of mutating this.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub base_url: String,
    pub model_id: String,
    pub temperature: f64,
    pub timeout: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClassifierConfig {
    /// Build a configuration from environment values, falling back to the
    /// documented defaults:
    ///
    /// - `OLLAMA_BASE_URL` (default `http://localhost:11434`)
    /// - `MODEL_ID` (default `llama3.2:3b`)
    /// - `TEMPERATURE` (default `0.1`)
    /// - `CLASSIFIER_TIMEOUT_MS` (default `30000`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("OLLAMA_BASE_URL").unwrap_or(defaults.base_url),
            model_id: env::var("MODEL_ID").unwrap_or(defaults.model_id),
            temperature: env::var("TEMPERATURE")
                .ok()
                .and_then(|s| s.parse::<f64>().ok())
                .unwrap_or(defaults.temperature),
            timeout: env::var("CLASSIFIER_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
        }
    }
}
