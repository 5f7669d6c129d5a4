//! Classification result envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Uniform envelope produced by every classification call.
///
/// Invariant: `success == false` exactly when `result` is empty and
/// `error_message` is set; `success == true` exactly when `result` carries at
/// least `type` and `confidence`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub result: Map<String, Value>,
    pub schema_name: String,
    pub model_id: String,
    pub latency_ms: f64,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ClassificationResult {
    /// Build a success envelope from validated arguments.
    pub fn success(
        result: Map<String, Value>,
        schema_name: impl Into<String>,
        model_id: impl Into<String>,
        latency_ms: f64,
    ) -> Self {
        Self {
            result,
            schema_name: schema_name.into(),
            model_id: model_id.into(),
            latency_ms,
            success: true,
            error_message: None,
        }
    }

    /// Build a failure envelope from any upstream error.
    pub fn failure(
        schema_name: impl Into<String>,
        model_id: impl Into<String>,
        latency_ms: f64,
        error: impl std::fmt::Display,
    ) -> Self {
        Self {
            result: Map::new(),
            schema_name: schema_name.into(),
            model_id: model_id.into(),
            latency_ms,
            success: false,
            error_message: Some(error.to_string()),
        }
    }

    /// The classification decision, if this is a success envelope.
    pub fn classification_type(&self) -> Option<&str> {
        self.result.get("type").and_then(Value::as_str)
    }

    /// The self-reported confidence, if this is a success envelope.
    pub fn confidence(&self) -> Option<f64> {
        self.result.get("confidence").and_then(Value::as_f64)
    }
}

/// Schema discovery listing returned by
/// [`Classifier::list_schemas`](crate::Classifier::list_schemas).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaListing {
    pub available_schemas: Vec<String>,
    pub default_schema: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_args() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("type".to_string(), json!("prompt"));
        map.insert("confidence".to_string(), json!(0.9));
        map
    }

    #[test]
    fn test_success_envelope_shape() {
        let result = ClassificationResult::success(sample_args(), "minimal", "llama3.2:3b", 12.5);
        assert!(result.success);
        assert!(result.error_message.is_none());
        assert_eq!(result.classification_type(), Some("prompt"));
        assert_eq!(result.confidence(), Some(0.9));
    }

    #[test]
    fn test_failure_envelope_shape() {
        let result =
            ClassificationResult::failure("minimal", "llama3.2:3b", 3.0, "backend exploded");
        assert!(!result.success);
        assert!(result.result.is_empty());
        assert_eq!(result.error_message.as_deref(), Some("backend exploded"));
    }

    #[test]
    fn test_serialization_skips_absent_error_message() {
        let result = ClassificationResult::success(sample_args(), "minimal", "m", 1.0);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("error_message").is_none());
        assert_eq!(json["success"], json!(true));
    }

    #[test]
    fn test_round_trip() {
        let result = ClassificationResult::failure("standard", "m", 7.0, "nope");
        let text = serde_json::to_string(&result).unwrap();
        let back: ClassificationResult = serde_json::from_str(&text).unwrap();
        assert!(!back.success);
        assert_eq!(back.schema_name, "standard");
        assert_eq!(back.error_message.as_deref(), Some("nope"));
    }
}
