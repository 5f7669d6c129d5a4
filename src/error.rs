use thiserror::Error;

/// Unified error type for the classification engine.
///
/// Every variant is caught at the [`Classifier`](crate::Classifier) boundary
/// and folded into the failure envelope; none of them is fatal to the hosting
/// process, and none of them is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested schema name is not registered. Always recoverable; the
    /// message enumerates every valid name so callers can self-correct.
    #[error("Unknown schema '{name}'. Available schemas: {}", .available.join(", "))]
    UnknownSchema {
        name: String,
        available: Vec<String>,
    },

    /// The backend invoked the tool but omitted a field the contract requires.
    #[error("Missing required field '{field}' in tool-call arguments")]
    MissingRequiredField { field: &'static str },

    /// The backend returned a value that cannot satisfy the field contract
    /// (e.g. a classification type outside the allowed set).
    #[error("Invalid value for field '{field}': {message}")]
    InvalidFieldValue {
        field: &'static str,
        message: String,
    },

    /// The backend answered with prose instead of invoking the declared call.
    #[error("No tool invocation found in the model response")]
    NoToolInvocation,

    /// No backend response arrived within the caller-supplied bound.
    #[error("Inference request timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    /// Transport-level failure reaching the backend (connect error, non-2xx
    /// status, malformed body).
    #[error("Backend unavailable: {message}")]
    BackendUnavailable { message: String },

    /// Empty input text. Rejected before any backend round trip.
    #[error("input_text must not be empty")]
    EmptyInput,

    /// Invalid construction-time configuration (e.g. an unparseable base URL).
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a backend-unavailable error from any transport-level cause.
    pub fn backend(message: impl Into<String>) -> Self {
        Error::BackendUnavailable {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}
